//! On-robot self tests
//!
//! Each test drives the robot through a short routine whose result is judged
//! on the paper; the runner only reports whether the motion commands went
//! through. Run against the simulator they double as geometry checks.

use ufmt::uWrite;

use crate::drawing::{fractals, shapes};
use crate::logger::{Console, Level};
use crate::robot::Turtle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestResult {
    Pass,
    Fail(TestError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestError {
    /// A motion command returned an error
    MotionFault,
}

pub trait SelfTest<T: Turtle> {
    fn name(&self) -> &'static str;
    fn run(&self, turtle: &mut T) -> TestResult;
}

fn judge<E>(result: Result<(), E>) -> TestResult {
    match result {
        Ok(()) => TestResult::Pass,
        Err(_) => TestResult::Fail(TestError::MotionFault),
    }
}

/// Raise and lower the pen twice
pub struct PenCycle;

impl<T: Turtle> SelfTest<T> for PenCycle {
    fn name(&self) -> &'static str {
        "pen cycle"
    }

    fn run(&self, turtle: &mut T) -> TestResult {
        judge(cycle_pen(turtle))
    }
}

fn cycle_pen<T: Turtle>(turtle: &mut T) -> Result<(), T::Error> {
    for _ in 0..2 {
        turtle.pen_up()?;
        turtle.pen_down()?;
    }
    Ok(())
}

/// A full turn on the spot: with a good calibration the mark on the paper
/// stays a dot and the robot faces its starting direction.
pub struct SpinInPlace;

impl<T: Turtle> SelfTest<T> for SpinInPlace {
    fn name(&self) -> &'static str {
        "spin in place"
    }

    fn run(&self, turtle: &mut T) -> TestResult {
        judge(turtle.turn_left(360.0))
    }
}

/// 10 cm square, which closes only when distance and turn calibrations agree
pub struct CalibrationSquare;

impl<T: Turtle> SelfTest<T> for CalibrationSquare {
    fn name(&self) -> &'static str {
        "calibration square"
    }

    fn run(&self, turtle: &mut T) -> TestResult {
        judge(shapes::square(turtle, 10.0))
    }
}

/// Second-level Koch curve, exercising both turn directions
pub struct KochStep;

impl<T: Turtle> SelfTest<T> for KochStep {
    fn name(&self) -> &'static str {
        "koch step"
    }

    fn run(&self, turtle: &mut T) -> TestResult {
        judge(fractals::koch_curve(turtle, 2, 9.0))
    }
}

pub struct TestRunner<W> {
    console: Console<W>,
    total_tests: u32,
    passed_tests: u32,
}

impl<W: uWrite> TestRunner<W> {
    pub fn new(console: Console<W>) -> Self {
        Self {
            console,
            total_tests: 0,
            passed_tests: 0,
        }
    }

    pub fn run_suite<T: Turtle>(
        &mut self,
        name: &str,
        turtle: &mut T,
        tests: &[&dyn SelfTest<T>],
    ) -> u32 {
        self.console.value(Level::Info, "suite", name);
        let mut failures = 0;
        for test in tests {
            self.total_tests += 1;
            match test.run(turtle) {
                TestResult::Pass => {
                    self.passed_tests += 1;
                    self.console.value(Level::Info, "PASS", test.name());
                }
                TestResult::Fail(TestError::MotionFault) => {
                    failures += 1;
                    self.console.value(Level::Error, "FAIL", test.name());
                }
            }
        }
        self.print_summary();
        failures
    }

    fn print_summary(&mut self) {
        self.console
            .ratio(Level::Info, "passed", self.passed_tests, self.total_tests);
    }

    pub fn passed(&self) -> u32 {
        self.passed_tests
    }

    pub fn total(&self) -> u32 {
        self.total_tests
    }

    pub fn into_console(self) -> Console<W> {
        self.console
    }
}

/// Every built-in self test, in the order they are meant to run
pub fn standard_suite<T: Turtle + 'static>() -> [&'static dyn SelfTest<T>; 4] {
    [&PenCycle, &SpinInPlace, &CalibrationSquare, &KochStep]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Simulator;
    use core::convert::Infallible;
    use std::string::String;

    struct Capture(String);

    impl uWrite for Capture {
        type Error = Infallible;

        fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
            self.0.push_str(s);
            Ok(())
        }
    }

    /// Turtle whose wheels are jammed
    struct Jammed;

    impl Turtle for Jammed {
        type Error = ();

        fn forward(&mut self, _: f32) -> Result<(), ()> {
            Err(())
        }

        fn turn_left(&mut self, _: f32) -> Result<(), ()> {
            Err(())
        }

        fn pen_up(&mut self) -> Result<(), ()> {
            Ok(())
        }

        fn pen_down(&mut self) -> Result<(), ()> {
            Ok(())
        }
    }

    #[test]
    fn standard_suite_passes_on_paper() {
        let mut runner = TestRunner::new(Console::new(Capture(String::new()), Level::Info));
        let mut sim = Simulator::headless();
        let suite = standard_suite();
        assert_eq!(runner.run_suite("simulator", &mut sim, &suite), 0);
        assert_eq!((runner.passed(), runner.total()), (4, 4));
        assert!(sim.distance_from_origin() > 8.0);
        let log = runner.into_console().into_inner().0;
        assert!(log.starts_with("[INF] suite: simulator\n"));
        assert!(log.ends_with("[INF] passed: 4/4\n"));
    }

    #[test]
    fn jammed_wheels_fail_motion_tests() {
        let mut runner = TestRunner::new(Console::new(Capture(String::new()), Level::Info));
        let suite = standard_suite();
        assert_eq!(runner.run_suite("jammed", &mut Jammed, &suite), 3);
        assert_eq!(runner.passed(), 1);
        let log = runner.into_console().into_inner().0;
        assert!(log.contains("[ERR] FAIL: spin in place\n"));
    }
}
