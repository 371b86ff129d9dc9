//! Configuration constants for the Tortuino robot

use core::f32::consts::PI;

use crate::drawing::Drawing;
use crate::drivers::calibration::{Calibration, Geometry};

/// CPU frequency in Hz, set by the build script
pub const CPU_FREQ_HZ: u32 = parse_hz(env!("MCU_FREQ_HZ"));

/// UART baud rate
pub const UART_BAUD: u32 = 9600;

/// Steps per output shaft revolution of the 28BYJ-48 steppers (manufacturer data)
pub const STEPS_PER_REVOLUTION: u16 = 64 * 64 / 2;

/// Wheel perimeter in centimeters, measured with the tyre on
pub const WHEEL_PERIMETER_CM: f32 = PI * 9.2;

/// Turning radius used when no calibration applies
pub const DEFAULT_TURNING_RADIUS_CM: f32 = 11.3 / 2.0;

/// Servo angle holding the pen off the paper
pub const PEN_UP_ANGLE: u8 = 50;

/// Servo angle pressing the pen on the paper
pub const PEN_DOWN_ANGLE: u8 = 10;

/// Delay between two samples of the start button in milliseconds
pub const BUTTON_POLL_MS: u16 = 10;

/// Wait after every pen command for the servo to finish moving
pub const PEN_SETTLE_MS: u16 = 200;

/// Stepper speed applied by `Tortuino::begin`, in revolutions per minute
pub const DEFAULT_SPEED_RPM: u16 = 10;

// Arduino pin numbers
pub const LEFT_STEPPER_PINS: [u8; 4] = [10, 12, 11, 13];
pub const RIGHT_STEPPER_PINS: [u8; 4] = [2, 4, 3, 5];
pub const SERVO_PIN: u8 = 9;
pub const BUTTON_PIN: u8 = 7;

/// Calibration the firmware starts with
pub const CALIBRATION: Calibration = Calibration::Color('w');

/// Drawing the firmware performs once the start button is released
pub const DRAWING: Drawing = Drawing::KochSnowflake { levels: 3, size: 15.0 };

const fn parse_hz(digits: &str) -> u32 {
    let bytes = digits.as_bytes();
    let mut value = 0u32;
    let mut i = 0;
    while i < bytes.len() {
        value = value * 10 + (bytes[i] - b'0') as u32;
        i += 1;
    }
    value
}

/// Tunables of one robot
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RobotConfig {
    pub geometry: Geometry,
    pub pen_up_angle: u8,
    pub pen_down_angle: u8,
    pub speed_rpm: u16,
    pub button_poll_ms: u16,
    pub pen_settle_ms: u16,
}

impl RobotConfig {
    /// Default configuration with a calibration applied to the geometry
    pub fn calibrated(calibration: Calibration) -> Self {
        let mut config = Self::default();
        config.geometry = calibration.apply(config.geometry);
        config
    }
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            geometry: Geometry::default(),
            pen_up_angle: PEN_UP_ANGLE,
            pen_down_angle: PEN_DOWN_ANGLE,
            speed_rpm: DEFAULT_SPEED_RPM,
            button_poll_ms: BUTTON_POLL_MS,
            pen_settle_ms: PEN_SETTLE_MS,
        }
    }
}
