pub mod button_handler;
pub mod calibration;
pub mod servo;
pub mod stepper;

pub use button_handler::StartButton;
pub use calibration::{Calibration, Geometry, RobotColor};
pub use servo::{Pen, PenState, Servo};
pub use stepper::{Direction, Stepper};
