//! Recursive drawings
//!
//! Levels count the depth of the recursion: level 1 is the plain base
//! figure, level 0 draws nothing.

use super::shapes::triangle;
use crate::robot::Turtle;

/// Binary tree with 90 degrees between sibling branches
pub fn tree<T: Turtle>(t: &mut T, levels: u8, trunk: f32) -> Result<(), T::Error> {
    symmetric_tree(t, levels, trunk, 90.0)
}

/// Binary tree symmetric about its trunk, with `spread` degrees between siblings
pub fn symmetric_tree<T: Turtle>(
    t: &mut T,
    levels: u8,
    trunk: f32,
    spread: f32,
) -> Result<(), T::Error> {
    asymmetric_tree(t, levels, trunk, spread, 0.0)
}

/// Binary tree whose branch pairs are rotated `lean` degrees to the left of
/// the parent. Each generation is two thirds the length of its parent.
///
/// The robot comes back to the foot of the trunk with the pen up: leaves are
/// retraced with the pen lifted, and the pen is only lowered again before
/// drawing the right-hand sibling.
pub fn asymmetric_tree<T: Turtle>(
    t: &mut T,
    levels: u8,
    trunk: f32,
    spread: f32,
    lean: f32,
) -> Result<(), T::Error> {
    match levels {
        0 => Ok(()),
        1 => {
            t.forward(trunk)?;
            t.pen_up()?;
            t.backward(trunk)
        }
        _ => {
            let branch = 2.0 * trunk / 3.0;
            t.forward(trunk)?;
            t.turn_left(lean + spread / 2.0)?;
            asymmetric_tree(t, levels - 1, branch, spread, lean)?;
            t.turn_right(spread)?;
            t.pen_down()?;
            asymmetric_tree(t, levels - 1, branch, spread, lean)?;
            t.turn_left(spread / 2.0 - lean)?;
            t.backward(trunk)
        }
    }
}

/// Two trees leaning 45 degrees each way on a shared trunk, giving every
/// branch an upward continuation and two horizontal side branches.
///
/// The second tree starts with the pen up: its upward branches retrace the
/// first tree, so only its right-hand branches are inked.
pub fn fir_tree<T: Turtle>(t: &mut T, levels: u8, trunk: f32) -> Result<(), T::Error> {
    asymmetric_tree(t, levels, trunk, 90.0, 45.0)?;
    asymmetric_tree(t, levels, trunk, 90.0, -45.0)
}

/// Koch curve spanning `size` centimeters, bumps on the left-hand side
pub fn koch_curve<T: Turtle>(t: &mut T, levels: u8, size: f32) -> Result<(), T::Error> {
    match levels {
        0 => Ok(()),
        1 => t.forward(size),
        _ => {
            let third = size / 3.0;
            koch_curve(t, levels - 1, third)?;
            t.turn_left(60.0)?;
            koch_curve(t, levels - 1, third)?;
            t.turn_right(120.0)?;
            koch_curve(t, levels - 1, third)?;
            t.turn_left(60.0)?;
            koch_curve(t, levels - 1, third)
        }
    }
}

/// Koch snowflake on a triangle of side `size`. The triangle is walked
/// clockwise so the bumps of every curve point outward; level 1 is the bare
/// triangle.
pub fn koch_snowflake<T: Turtle>(t: &mut T, levels: u8, size: f32) -> Result<(), T::Error> {
    if levels == 0 {
        return Ok(());
    }
    for _ in 0..3 {
        koch_curve(t, levels, size)?;
        t.turn_right(120.0)?;
    }
    Ok(())
}

/// Sierpiński triangle of side `size`, built from triangles placed at the
/// three corners with pen-up moves in between. Ends at the starting pose.
pub fn sierpinski<T: Turtle>(t: &mut T, levels: u8, size: f32) -> Result<(), T::Error> {
    match levels {
        0 => Ok(()),
        1 => triangle(t, size),
        _ => {
            let half = size / 2.0;
            sierpinski(t, levels - 1, half)?;

            t.pen_up()?;
            t.forward(half)?;
            t.pen_down()?;
            sierpinski(t, levels - 1, half)?;

            t.pen_up()?;
            t.turn_left(120.0)?;
            t.forward(half)?;
            t.turn_right(120.0)?;
            t.pen_down()?;
            sierpinski(t, levels - 1, half)?;

            t.pen_up()?;
            t.turn_right(120.0)?;
            t.forward(half)?;
            t.turn_left(120.0)?;
            t.pen_down()
        }
    }
}
