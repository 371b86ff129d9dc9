//! Board support for an Arduino Uno class ATmega328P

pub mod gpio;
pub mod pwm;
pub mod timer;
pub mod uart;

pub use gpio::{Input, Output, Pin, Port};
pub use pwm::ServoPwm;
pub use timer::Delay;
pub use uart::Serial;

use avr_device::atmega328p::Peripherals;

use crate::config::{RobotConfig, BUTTON_PIN, LEFT_STEPPER_PINS, RIGHT_STEPPER_PINS, SERVO_PIN};
use crate::drivers::{Pen, Servo, StartButton, Stepper};
use crate::robot::Parts;

/// Robot parts as wired on the board
pub type BoardParts = Parts<Pin<Output>, ServoPwm, Pin<Input>, Delay>;

pub struct Board {
    pub parts: BoardParts,
    pub serial: Serial,
}

fn coils(pins: [u8; 4]) -> Option<[Pin<Output>; 4]> {
    Some([
        Pin::<Output>::output(pins[0])?,
        Pin::<Output>::output(pins[1])?,
        Pin::<Output>::output(pins[2])?,
        Pin::<Output>::output(pins[3])?,
    ])
}

/// Claim the peripherals and wire up the robot; `None` once already taken.
pub fn take(config: &RobotConfig) -> Option<Board> {
    let _dp = Peripherals::take()?;

    let steps = config.geometry.steps_per_revolution;
    let left = Stepper::new(coils(LEFT_STEPPER_PINS)?, steps);
    let right = Stepper::new(coils(RIGHT_STEPPER_PINS)?, steps);
    let servo = Servo::attach(ServoPwm::new(Pin::<Output>::output(SERVO_PIN)?));
    let pen = Pen::new(
        servo,
        config.pen_up_angle,
        config.pen_down_angle,
        config.pen_settle_ms,
    );
    let button = StartButton::new(Pin::<Input>::input_pull_up(BUTTON_PIN)?);

    Some(Board {
        parts: Parts {
            left,
            right,
            pen,
            button,
            delay: Delay::new(),
        },
        serial: Serial::new(),
    })
}
