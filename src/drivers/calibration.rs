//! Robot geometry and the per-robot turning calibration
//!
//! Every robot is identified by the colour of its breadboard, written as the
//! first letter of the French colour name. Each colour has a turning diameter
//! measured on the real robot, which compensates the systematic error when
//! spinning in place.

use core::f32::consts::PI;

#[allow(unused_imports)]
use micromath::F32Ext;

use crate::config::{DEFAULT_TURNING_RADIUS_CM, STEPS_PER_REVOLUTION, WHEEL_PERIMETER_CM};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RobotColor {
    White,
    Yellow,
    Blue,
    Green,
    Red,
    Black,
}

impl RobotColor {
    pub fn from_char(letter: char) -> Option<Self> {
        match letter {
            'w' => Some(RobotColor::White),
            'j' => Some(RobotColor::Yellow),
            'b' => Some(RobotColor::Blue),
            'v' => Some(RobotColor::Green),
            'r' => Some(RobotColor::Red),
            'n' => Some(RobotColor::Black),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            RobotColor::White => 'w',
            RobotColor::Yellow => 'j',
            RobotColor::Blue => 'b',
            RobotColor::Green => 'v',
            RobotColor::Red => 'r',
            RobotColor::Black => 'n',
        }
    }

    /// Measured turning diameter in centimeters
    pub fn turning_diameter_cm(&self) -> f32 {
        match self {
            RobotColor::Blue => 11.0,
            RobotColor::Green => 10.5,
            RobotColor::White | RobotColor::Yellow | RobotColor::Red | RobotColor::Black => 11.3,
        }
    }
}

/// How a robot picks its turning radius at startup
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Calibration {
    /// Keep the default radius
    Default,
    /// Look the radius up by robot colour letter; unknown letters keep the default
    Color(char),
    /// Use half of the given turning diameter, for calibrating a new robot
    TurningDiameter(f32),
}

impl Calibration {
    pub fn apply(&self, geometry: Geometry) -> Geometry {
        let turning_radius_cm = match *self {
            Calibration::Default => geometry.turning_radius_cm,
            Calibration::Color(letter) => RobotColor::from_char(letter)
                .map(|color| color.turning_diameter_cm() / 2.0)
                .unwrap_or(geometry.turning_radius_cm),
            Calibration::TurningDiameter(diameter) => diameter / 2.0,
        };
        Geometry { turning_radius_cm, ..geometry }
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Calibration::Default
    }
}

/// Mechanical parameters turning centimeters and degrees into steps
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub steps_per_revolution: u16,
    pub wheel_perimeter_cm: f32,
    pub turning_radius_cm: f32,
}

impl Geometry {
    /// Steps each wheel makes to roll `distance_cm`; the sign is ignored and
    /// partial steps are truncated.
    pub fn distance_to_steps(&self, distance_cm: f32) -> u32 {
        (distance_cm.abs() / self.wheel_perimeter_cm * self.steps_per_revolution as f32) as u32
    }

    /// Steps each wheel makes to spin the robot in place by `angle_deg`
    pub fn turn_steps(&self, angle_deg: f32) -> u32 {
        self.distance_to_steps(PI / 180.0 * angle_deg.abs() * self.turning_radius_cm)
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            steps_per_revolution: STEPS_PER_REVOLUTION,
            wheel_perimeter_cm: WHEEL_PERIMETER_CM,
            turning_radius_cm: DEFAULT_TURNING_RADIUS_CM,
        }
    }
}
