use super::{challenges, fractals, shapes};
use crate::robot::Turtle;

/// A drawing together with its parameters, ready to hand to a robot
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Drawing {
    Polygon { sides: u32, side: f32 },
    Triangle { side: f32 },
    Square { side: f32 },
    Circle { radius: f32 },
    Tree { levels: u8, trunk: f32 },
    SymmetricTree { levels: u8, trunk: f32, spread: f32 },
    AsymmetricTree { levels: u8, trunk: f32, spread: f32, lean: f32 },
    FirTree { levels: u8, trunk: f32 },
    KochCurve { levels: u8, size: f32 },
    KochSnowflake { levels: u8, size: f32 },
    Sierpinski { levels: u8, size: f32 },
    House { size: f32 },
    SquareSpiral { turns: u32, step: f32 },
    Tangram { size: f32 },
    SnowflakeOrnament { arm: f32 },
}

impl Drawing {
    pub fn draw<T: Turtle>(&self, t: &mut T) -> Result<(), T::Error> {
        match *self {
            Drawing::Polygon { sides, side } => shapes::polygon(t, sides, side),
            Drawing::Triangle { side } => shapes::triangle(t, side),
            Drawing::Square { side } => shapes::square(t, side),
            Drawing::Circle { radius } => shapes::circle(t, radius),
            Drawing::Tree { levels, trunk } => fractals::tree(t, levels, trunk),
            Drawing::SymmetricTree {
                levels,
                trunk,
                spread,
            } => fractals::symmetric_tree(t, levels, trunk, spread),
            Drawing::AsymmetricTree {
                levels,
                trunk,
                spread,
                lean,
            } => fractals::asymmetric_tree(t, levels, trunk, spread, lean),
            Drawing::FirTree { levels, trunk } => fractals::fir_tree(t, levels, trunk),
            Drawing::KochCurve { levels, size } => fractals::koch_curve(t, levels, size),
            Drawing::KochSnowflake { levels, size } => fractals::koch_snowflake(t, levels, size),
            Drawing::Sierpinski { levels, size } => fractals::sierpinski(t, levels, size),
            Drawing::House { size } => challenges::house(t, size),
            Drawing::SquareSpiral { turns, step } => challenges::square_spiral(t, turns, step),
            Drawing::Tangram { size } => challenges::tangram(t, size),
            Drawing::SnowflakeOrnament { arm } => challenges::snowflake_ornament(t, arm),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Drawing::Polygon { .. } => "polygon",
            Drawing::Triangle { .. } => "triangle",
            Drawing::Square { .. } => "square",
            Drawing::Circle { .. } => "circle",
            Drawing::Tree { .. } => "tree",
            Drawing::SymmetricTree { .. } => "symmetric tree",
            Drawing::AsymmetricTree { .. } => "asymmetric tree",
            Drawing::FirTree { .. } => "fir tree",
            Drawing::KochCurve { .. } => "koch curve",
            Drawing::KochSnowflake { .. } => "koch snowflake",
            Drawing::Sierpinski { .. } => "sierpinski",
            Drawing::House { .. } => "house",
            Drawing::SquareSpiral { .. } => "square spiral",
            Drawing::Tangram { .. } => "tangram",
            Drawing::SnowflakeOrnament { .. } => "snowflake ornament",
        }
    }
}
