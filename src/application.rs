//! Firmware flow: announce, wait for the start button, draw, report, halt.

use embedded_hal::blocking::delay::{DelayMs, DelayUs};
use embedded_hal::digital::v2::{InputPin, OutputPin};
use embedded_hal::PwmPin;
use ufmt::uWrite;

use crate::diagnostics::Error;
use crate::drawing::Drawing;
use crate::logger::{Console, Level};
use crate::robot::Tortuino;

pub struct Application<W> {
    console: Console<W>,
    drawing: Drawing,
}

impl<W: uWrite> Application<W> {
    pub fn new(console: Console<W>, drawing: Drawing) -> Self {
        Self { console, drawing }
    }

    /// One drawing session. Returns once the drawing is complete.
    pub fn run<S, V, B, D>(&mut self, robot: &mut Tortuino<S, V, B, D>) -> Result<(), Error>
    where
        S: OutputPin,
        V: PwmPin<Duty = u16>,
        B: InputPin,
        D: DelayMs<u16> + DelayUs<u32>,
    {
        self.console.info("Tortuino ready");
        self.console.value(
            Level::Debug,
            "steps/rev",
            &robot.geometry().steps_per_revolution,
        );
        self.console.length(
            Level::Debug,
            "turning radius",
            robot.geometry().turning_radius_cm,
        );
        self.console.length(
            Level::Debug,
            "wheel perimeter",
            robot.geometry().wheel_perimeter_cm,
        );
        self.console.value(Level::Debug, "step delay us", &robot.step_delay_us());

        robot.begin()?;
        self.console.value(Level::Info, "drawing", self.drawing.name());
        self.drawing.draw(robot)?;

        let (left, right) = robot.steps_taken();
        self.console.value(Level::Debug, "left steps", &left);
        self.console.value(Level::Debug, "right steps", &right);
        self.console.info("done");
        Ok(())
    }

    /// Run a session, report any failure and park the robot
    pub fn start<S, V, B, D>(mut self, mut robot: Tortuino<S, V, B, D>) -> !
    where
        S: OutputPin,
        V: PwmPin<Duty = u16>,
        B: InputPin,
        D: DelayMs<u16> + DelayUs<u32>,
    {
        if let Err(e) = self.run(&mut robot) {
            self.console.error("draw", e);
        }
        robot.halt()
    }

    pub fn into_console(self) -> Console<W> {
        self.console
    }
}
