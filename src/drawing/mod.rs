//! Drawing routines composed from the motion primitives

pub mod challenges;
pub mod fractals;
pub mod program;
pub mod shapes;
pub mod tracker;

pub use challenges::{house, snowflake_ornament, square_spiral, tangram};
pub use fractals::{
    asymmetric_tree, fir_tree, koch_curve, koch_snowflake, sierpinski, symmetric_tree, tree,
};
pub use program::Drawing;
pub use shapes::{circle, polygon, square, triangle};
pub use tracker::Tracker;

#[allow(unused_imports)]
use micromath::F32Ext;

/// Wrap an angle in degrees into (-180, 180]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle % 360.0;
    if wrapped > 180.0 {
        wrapped - 360.0
    } else if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Length of `(dx, dy)`. micromath's square root is a coarse estimate, so it
/// only seeds two Newton iterations.
pub(crate) fn hypot(dx: f32, dy: f32) -> f32 {
    let square = dx * dx + dy * dy;
    if square == 0.0 {
        return 0.0;
    }
    let mut root = square.sqrt();
    for _ in 0..2 {
        root = 0.5 * (root + square / root);
    }
    root
}
