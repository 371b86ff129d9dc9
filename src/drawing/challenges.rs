//! Fixed drawings set as exercises for the robot
//!
//! Every challenge starts and ends at the same pose with the pen down.

use super::shapes::square;
use super::tracker::Tracker;
use crate::robot::Turtle;

/// Height of an equilateral triangle of side 1
const SQRT_3_2: f32 = 0.866_025_4;

/// Square walls of side `size` with an equilateral roof on top
pub fn house<T: Turtle>(t: &mut T, size: f32) -> Result<(), T::Error> {
    let mut path = Tracker::new(t);
    path.pen_down()?;
    square(&mut path, size)?;
    path.move_to(0.0, size)?;
    path.line_to(size / 2.0, size + size * SQRT_3_2)?;
    path.line_to(size, size)?;
    path.finish()
}

/// Square spiral growing outward: segment `i` is `i * step` long, each
/// followed by a quarter turn to the left.
pub fn square_spiral<T: Turtle>(t: &mut T, turns: u32, step: f32) -> Result<(), T::Error> {
    let mut path = Tracker::new(t);
    path.pen_down()?;
    for i in 1..=turns {
        path.forward(i as f32 * step)?;
        path.turn_left(90.0)?;
    }
    path.finish()
}

/// The seven tangram pieces cut from a square of side `size`.
///
/// On a 4x4 grid: two large triangles share the lower-left corner, the
/// medium triangle fills the upper-right corner, and the square, the two
/// small triangles and the parallelogram fill the band between them.
pub fn tangram<T: Turtle>(t: &mut T, size: f32) -> Result<(), T::Error> {
    let u = size / 4.0;
    let mut path = Tracker::new(t);
    path.pen_down()?;

    // outline
    path.line_to(4.0 * u, 0.0)?;
    path.line_to(4.0 * u, 4.0 * u)?;
    path.line_to(0.0, 4.0 * u)?;
    path.line_to(0.0, 0.0)?;

    // diagonal between the large triangles, continued along the square
    path.line_to(3.0 * u, 3.0 * u)?;
    // top of the small triangle, bottom of the parallelogram
    path.line_to(u, 3.0 * u)?;

    // long cut under the large triangles
    path.move_to(0.0, 4.0 * u)?;
    path.line_to(4.0 * u, 0.0)?;

    // square and small triangle edge, then the medium triangle
    path.move_to(3.0 * u, u)?;
    path.line_to(4.0 * u, 2.0 * u)?;
    path.line_to(2.0 * u, 4.0 * u)?;

    path.finish()
}

/// Six-armed snowflake; each arm carries a V-shaped pair of branches at
/// half its length.
pub fn snowflake_ornament<T: Turtle>(t: &mut T, arm: f32) -> Result<(), T::Error> {
    t.pen_down()?;
    let branch = arm / 4.0;
    for _ in 0..6 {
        t.forward(arm / 2.0)?;
        t.turn_left(45.0)?;
        t.forward(branch)?;
        t.backward(branch)?;
        t.turn_right(90.0)?;
        t.forward(branch)?;
        t.backward(branch)?;
        t.turn_left(45.0)?;
        t.forward(arm / 2.0)?;
        t.backward(arm)?;
        t.turn_left(60.0)?;
    }
    Ok(())
}
