use tortuino::config;
use tortuino::sim::{Segment, Simulator};
use tortuino::Drawing;

/// Run a drawing and keep every stroke it leaves
fn trace(drawing: Drawing) -> Vec<Segment> {
    let mut strokes = Vec::new();
    let mut sim = Simulator::new(|segment: Segment| strokes.push(segment));
    drawing.draw(&mut sim).unwrap();
    drop(sim);
    strokes
}

fn close(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() < tolerance
}

#[test]
fn firmware_drawing_is_a_closed_snowflake() {
    let mut strokes = Vec::new();
    let mut sim = Simulator::new(|segment: Segment| strokes.push(segment));
    config::DRAWING.draw(&mut sim).unwrap();
    assert!(sim.distance_from_origin() < 0.5);
    let stats = *sim.stats();
    drop(sim);

    assert_eq!(strokes.len(), 48);
    assert_eq!(stats.segments, 48);
    assert!(close(stats.drawn_cm, 80.0, 0.01));
    assert_eq!(stats.pen_lifts, 0);
}

#[test]
fn strokes_chain_while_the_pen_stays_down() {
    let strokes = trace(Drawing::Square { side: 5.0 });
    assert_eq!(strokes.len(), 4);
    for pair in strokes.windows(2) {
        assert!(pair[0].to.distance(&pair[1].from) < 1e-3);
    }
    for stroke in &strokes {
        assert!(close(stroke.length(), 5.0, 0.05));
    }
}

#[test]
fn every_program_stays_on_a_sheet_of_paper() {
    let programs = [
        Drawing::Polygon { sides: 6, side: 5.0 },
        Drawing::Triangle { side: 10.0 },
        Drawing::Circle { radius: 4.0 },
        Drawing::Tree { levels: 5, trunk: 6.0 },
        Drawing::SymmetricTree { levels: 4, trunk: 6.0, spread: 60.0 },
        Drawing::AsymmetricTree { levels: 4, trunk: 6.0, spread: 60.0, lean: 15.0 },
        Drawing::FirTree { levels: 4, trunk: 6.0 },
        Drawing::KochCurve { levels: 4, size: 20.0 },
        Drawing::Sierpinski { levels: 4, size: 20.0 },
        Drawing::House { size: 8.0 },
        Drawing::SquareSpiral { turns: 12, step: 1.0 },
        Drawing::Tangram { size: 16.0 },
        Drawing::SnowflakeOrnament { arm: 8.0 },
    ];
    for drawing in programs {
        let mut sim = Simulator::headless();
        drawing.draw(&mut sim).unwrap();
        let stats = sim.stats();
        assert!(stats.segments > 0, "{} drew nothing", drawing.name());
        // A4 paper
        assert!(stats.width() < 29.7, "{} is too wide", drawing.name());
        assert!(stats.height() < 29.7, "{} is too tall", drawing.name());
    }
}

#[test]
fn trees_come_back_to_their_foot_with_the_pen_up() {
    for drawing in [
        Drawing::Tree { levels: 4, trunk: 5.0 },
        Drawing::FirTree { levels: 3, trunk: 5.0 },
    ] {
        let mut sim = Simulator::headless();
        drawing.draw(&mut sim).unwrap();
        assert!(sim.distance_from_origin() < 0.5, "{}", drawing.name());
        assert!(!sim.is_pen_down());
    }
}

#[test]
fn sierpinski_leaves_one_triangle_per_leaf() {
    let mut sim = Simulator::headless();
    Drawing::Sierpinski { levels: 3, size: 16.0 }
        .draw(&mut sim)
        .unwrap();
    // 9 triangles of side 4
    assert_eq!(sim.stats().segments, 27);
    assert!(close(sim.stats().drawn_cm, 108.0, 0.01));
    assert!(sim.distance_from_origin() < 0.5);
    assert!(sim.is_pen_down());
}
