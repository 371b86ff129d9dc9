//! Motion primitives of the Tortuino robot
//!
//! Both wheels are stepped in lockstep, one step each per iteration, which
//! approximates simultaneous motion without any timer interrupt. The robot
//! spins around the pen holder, so turning with the pen down leaves a dot
//! rather than a circle.

use embedded_hal::blocking::delay::{DelayMs, DelayUs};
use embedded_hal::digital::v2::{InputPin, OutputPin};
use embedded_hal::PwmPin;

use crate::config::RobotConfig;
use crate::diagnostics::Error;
use crate::drivers::{Calibration, Direction, Geometry, Pen, PenState, StartButton, Stepper};

/// The four motion commands every drawing is made of
pub trait Turtle {
    type Error;

    /// Roll straight ahead by `distance` centimeters; negative goes backward.
    fn forward(&mut self, distance: f32) -> Result<(), Self::Error>;

    fn backward(&mut self, distance: f32) -> Result<(), Self::Error> {
        self.forward(-distance)
    }

    /// Spin in place by `angle` degrees counter-clockwise; negative turns right.
    fn turn_left(&mut self, angle: f32) -> Result<(), Self::Error>;

    fn turn_right(&mut self, angle: f32) -> Result<(), Self::Error> {
        self.turn_left(-angle)
    }

    fn pen_up(&mut self) -> Result<(), Self::Error>;

    fn pen_down(&mut self) -> Result<(), Self::Error>;
}

impl<T: Turtle + ?Sized> Turtle for &mut T {
    type Error = T::Error;

    fn forward(&mut self, distance: f32) -> Result<(), Self::Error> {
        (**self).forward(distance)
    }

    fn turn_left(&mut self, angle: f32) -> Result<(), Self::Error> {
        (**self).turn_left(angle)
    }

    fn pen_up(&mut self) -> Result<(), Self::Error> {
        (**self).pen_up()
    }

    fn pen_down(&mut self) -> Result<(), Self::Error> {
        (**self).pen_down()
    }
}

/// Hardware owned by a robot
pub struct Parts<S, V, B, D> {
    pub left: Stepper<S>,
    pub right: Stepper<S>,
    pub pen: Pen<V>,
    pub button: StartButton<B>,
    pub delay: D,
}

pub struct Tortuino<S, V, B, D> {
    left: Stepper<S>,
    right: Stepper<S>,
    pen: Pen<V>,
    button: StartButton<B>,
    delay: D,
    config: RobotConfig,
    speed_rpm: u16,
    step_delay_us: u32,
}

impl<S, V, B, D> Tortuino<S, V, B, D>
where
    S: OutputPin,
    V: PwmPin<Duty = u16>,
    B: InputPin,
    D: DelayMs<u16> + DelayUs<u32>,
{
    /// Default configuration with `calibration` applied to the turning radius
    pub fn new(parts: Parts<S, V, B, D>, calibration: Calibration) -> Self {
        Self::with_config(parts, RobotConfig::calibrated(calibration))
    }

    pub fn with_config(parts: Parts<S, V, B, D>, config: RobotConfig) -> Self {
        let step_delay_us = step_delay_us(config.geometry.steps_per_revolution, config.speed_rpm)
            .unwrap_or(0);
        Self {
            left: parts.left,
            right: parts.right,
            pen: parts.pen,
            button: parts.button,
            delay: parts.delay,
            config,
            speed_rpm: config.speed_rpm,
            step_delay_us,
        }
    }

    /// Put the robot in its standard starting state: configured default speed
    /// whatever was set before, pen down, then block until the start button
    /// has been pressed and released.
    pub fn begin(&mut self) -> Result<(), Error> {
        self.set_speed(self.config.speed_rpm)?;
        self.pen_down()?;
        self.wait_for_button()
    }

    /// Stepper speed in revolutions per minute, shared by both wheels
    pub fn set_speed(&mut self, rpm: u16) -> Result<(), Error> {
        self.step_delay_us = step_delay_us(self.config.geometry.steps_per_revolution, rpm)?;
        self.speed_rpm = rpm;
        Ok(())
    }

    /// Current stepper speed in revolutions per minute
    pub fn speed_rpm(&self) -> u16 {
        self.speed_rpm
    }

    pub fn wait_for_button(&mut self) -> Result<(), Error> {
        self.button.arm()?;
        loop {
            match self.button.poll() {
                Ok(()) => return Ok(()),
                Err(nb::Error::WouldBlock) => self.delay.delay_ms(self.config.button_poll_ms),
                Err(nb::Error::Other(e)) => return Err(e),
            }
        }
    }

    /// Park the robot for good
    pub fn halt(&mut self) -> ! {
        loop {
            self.delay.delay_ms(self.config.button_poll_ms);
        }
    }

    /// Step both wheels `steps` times, right wheel first
    fn drive(&mut self, steps: u32, right: Direction, left: Direction) -> Result<(), Error> {
        for _ in 0..steps {
            self.right.step(right)?;
            self.left.step(left)?;
            self.delay.delay_us(self.step_delay_us);
        }
        Ok(())
    }

    pub fn geometry(&self) -> &Geometry {
        &self.config.geometry
    }

    pub fn config(&self) -> &RobotConfig {
        &self.config
    }

    pub fn step_delay_us(&self) -> u32 {
        self.step_delay_us
    }

    pub fn pen_state(&self) -> Option<PenState> {
        self.pen.state()
    }

    /// Steps issued so far by the left and right wheel
    pub fn steps_taken(&self) -> (u32, u32) {
        (self.left.steps_taken(), self.right.steps_taken())
    }

    pub fn free(self) -> Parts<S, V, B, D> {
        Parts {
            left: self.left,
            right: self.right,
            pen: self.pen,
            button: self.button,
            delay: self.delay,
        }
    }
}

impl<S, V, B, D> Turtle for Tortuino<S, V, B, D>
where
    S: OutputPin,
    V: PwmPin<Duty = u16>,
    B: InputPin,
    D: DelayMs<u16> + DelayUs<u32>,
{
    type Error = Error;

    fn forward(&mut self, distance: f32) -> Result<(), Error> {
        let steps = self.config.geometry.distance_to_steps(distance);
        // Wheels are mounted mirrored
        let direction = Direction::of(distance);
        self.drive(steps, direction, direction.reverse())
    }

    fn turn_left(&mut self, angle: f32) -> Result<(), Error> {
        let steps = self.config.geometry.turn_steps(angle);
        let direction = Direction::of(angle);
        self.drive(steps, direction, direction)
    }

    fn pen_up(&mut self) -> Result<(), Error> {
        self.pen.raise(&mut self.delay)
    }

    fn pen_down(&mut self) -> Result<(), Error> {
        self.pen.lower(&mut self.delay)
    }
}

/// Microseconds between two steps at `rpm`
pub fn step_delay_us(steps_per_revolution: u16, rpm: u16) -> Result<u32, Error> {
    if rpm == 0 || steps_per_revolution == 0 {
        return Err(Error::InvalidSpeed);
    }
    Ok(60_000_000 / steps_per_revolution as u32 / rpm as u32)
}
