//! Dead-reckoning on top of the motion primitives
//!
//! The robot has no position feedback, so the pose here is the one implied by
//! the commands sent, measured from where the tracker was created.

#[allow(unused_imports)]
use micromath::F32Ext;

use super::{hypot, normalize_degrees};
use crate::drivers::PenState;
use crate::robot::Turtle;

/// Moves shorter than this are skipped
const MIN_MOVE_CM: f32 = 1e-3;

pub struct Tracker<T> {
    turtle: T,
    x: f32,
    y: f32,
    heading: f32,
    pen: Option<PenState>,
}

impl<T: Turtle> Tracker<T> {
    /// Origin at the current position, heading 0 along the current direction.
    /// The pen state is unknown until the first pen command.
    pub fn new(turtle: T) -> Self {
        Self {
            turtle,
            x: 0.0,
            y: 0.0,
            heading: 0.0,
            pen: None,
        }
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Turn the shortest way to an absolute heading
    pub fn face(&mut self, heading: f32) -> Result<(), T::Error> {
        let delta = normalize_degrees(heading - self.heading);
        if delta != 0.0 {
            self.turn_left(delta)?;
        }
        Ok(())
    }

    /// Draw a straight line to `(x, y)`
    pub fn line_to(&mut self, x: f32, y: f32) -> Result<(), T::Error> {
        if self.pen != Some(PenState::Down) {
            self.pen_down()?;
        }
        self.go_to(x, y)
    }

    /// Travel to `(x, y)` with the pen lifted
    pub fn move_to(&mut self, x: f32, y: f32) -> Result<(), T::Error> {
        if self.pen != Some(PenState::Up) {
            self.pen_up()?;
        }
        self.go_to(x, y)
    }

    fn go_to(&mut self, x: f32, y: f32) -> Result<(), T::Error> {
        let dx = x - self.x;
        let dy = y - self.y;
        let distance = hypot(dx, dy);
        if distance < MIN_MOVE_CM {
            return Ok(());
        }
        self.face(dy.atan2(dx).to_degrees())?;
        self.turtle.forward(distance)?;
        // Snap to the target so rounding does not accumulate
        self.x = x;
        self.y = y;
        Ok(())
    }

    /// Return to the origin, face heading 0 and leave the pen down
    pub fn finish(&mut self) -> Result<(), T::Error> {
        self.move_to(0.0, 0.0)?;
        self.face(0.0)?;
        self.pen_down()
    }

    pub fn into_inner(self) -> T {
        self.turtle
    }
}

impl<T: Turtle> Turtle for Tracker<T> {
    type Error = T::Error;

    fn forward(&mut self, distance: f32) -> Result<(), T::Error> {
        self.turtle.forward(distance)?;
        let radians = self.heading.to_radians();
        self.x += distance * radians.cos();
        self.y += distance * radians.sin();
        Ok(())
    }

    fn turn_left(&mut self, angle: f32) -> Result<(), T::Error> {
        self.turtle.turn_left(angle)?;
        self.heading = normalize_degrees(self.heading + angle);
        Ok(())
    }

    fn pen_up(&mut self) -> Result<(), T::Error> {
        self.turtle.pen_up()?;
        self.pen = Some(PenState::Up);
        Ok(())
    }

    fn pen_down(&mut self) -> Result<(), T::Error> {
        self.turtle.pen_down()?;
        self.pen = Some(PenState::Down);
        Ok(())
    }
}
