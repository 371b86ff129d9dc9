use core::f32::consts::PI;

use crate::robot::Turtle;

/// Regular polygon drawn counter-clockwise from the current pose, ending
/// where it started.
pub fn polygon<T: Turtle>(t: &mut T, sides: u32, side: f32) -> Result<(), T::Error> {
    if sides == 0 {
        return Ok(());
    }
    let exterior = 360.0 / sides as f32;
    for _ in 0..sides {
        t.forward(side)?;
        t.turn_left(exterior)?;
    }
    Ok(())
}

/// Equilateral triangle
pub fn triangle<T: Turtle>(t: &mut T, side: f32) -> Result<(), T::Error> {
    polygon(t, 3, side)
}

pub fn square<T: Turtle>(t: &mut T, side: f32) -> Result<(), T::Error> {
    polygon(t, 4, side)
}

/// Circle approximated by a polygon with 20 sides per centimeter of radius.
/// The circle starts tangent to the current heading; radii under half a millimeter draw nothing.
pub fn circle<T: Turtle>(t: &mut T, radius: f32) -> Result<(), T::Error> {
    let sides = 20.0 * radius;
    if sides < 1.0 {
        return Ok(());
    }
    polygon(t, sides as u32, 2.0 * PI * radius / sides)
}
