//! Paper simulator
//!
//! Runs drawings without hardware: the simulator keeps the pose implied by
//! the motion commands and hands every inked segment to a sink. Useful to
//! preview a drawing on the host and to check the geometry of the drawing
//! routines in tests. Heading 0 points along +x and `turn_left` is
//! counter-clockwise, with y pointing up as on paper.

use core::convert::Infallible;

#[allow(unused_imports)]
use micromath::F32Ext;

use crate::drawing::{hypot, normalize_degrees};
use crate::robot::Turtle;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f32 {
        hypot(other.x - self.x, other.y - self.y)
    }
}

/// A stroke left on the paper
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn length(&self) -> f32 {
        self.from.distance(&self.to)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Stats {
    /// Length of ink laid down
    pub drawn_cm: f32,
    /// Length rolled with the pen up
    pub travel_cm: f32,
    pub segments: u32,
    pub pen_lifts: u32,
    pub turns: u32,
    /// Lower-left and upper-right corners of the ink
    pub bounds: Option<(Point, Point)>,
}

impl Stats {
    fn include(&mut self, point: Point) {
        self.bounds = Some(match self.bounds {
            None => (point, point),
            Some((min, max)) => (
                Point::new(min.x.min(point.x), min.y.min(point.y)),
                Point::new(max.x.max(point.x), max.y.max(point.y)),
            ),
        });
    }

    pub fn width(&self) -> f32 {
        self.bounds.map(|(min, max)| max.x - min.x).unwrap_or(0.0)
    }

    pub fn height(&self) -> f32 {
        self.bounds.map(|(min, max)| max.y - min.y).unwrap_or(0.0)
    }
}

pub struct Simulator<F> {
    position: Point,
    heading: f32,
    pen_down: bool,
    stats: Stats,
    sink: F,
}

fn discard(_: Segment) {}

impl Simulator<fn(Segment)> {
    /// Simulator that only keeps statistics
    pub fn headless() -> Self {
        Self::new(discard as fn(Segment))
    }
}

impl<F: FnMut(Segment)> Simulator<F> {
    /// Start at the origin, heading along +x, pen down
    pub fn new(sink: F) -> Self {
        Self {
            position: Point::default(),
            heading: 0.0,
            pen_down: true,
            stats: Stats::default(),
            sink,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Heading in degrees within (-180, 180]
    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn distance_from_origin(&self) -> f32 {
        self.position.distance(&Point::default())
    }
}

impl<F: FnMut(Segment)> Turtle for Simulator<F> {
    type Error = Infallible;

    fn forward(&mut self, distance: f32) -> Result<(), Infallible> {
        if distance == 0.0 {
            return Ok(());
        }
        let radians = self.heading.to_radians();
        let from = self.position;
        let to = Point::new(
            from.x + distance * radians.cos(),
            from.y + distance * radians.sin(),
        );
        self.position = to;
        if self.pen_down {
            self.stats.drawn_cm += distance.abs();
            self.stats.segments += 1;
            self.stats.include(from);
            self.stats.include(to);
            (self.sink)(Segment { from, to });
        } else {
            self.stats.travel_cm += distance.abs();
        }
        Ok(())
    }

    fn turn_left(&mut self, angle: f32) -> Result<(), Infallible> {
        self.heading = normalize_degrees(self.heading + angle);
        self.stats.turns += 1;
        Ok(())
    }

    fn pen_up(&mut self) -> Result<(), Infallible> {
        if self.pen_down {
            self.stats.pen_lifts += 1;
        }
        self.pen_down = false;
        Ok(())
    }

    fn pen_down(&mut self) -> Result<(), Infallible> {
        self.pen_down = true;
        Ok(())
    }
}
