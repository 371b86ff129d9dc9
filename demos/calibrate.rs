//! Run the self-test suite on paper after each press of the start button.
//!
//! A well calibrated robot leaves a dot for the spin, a closed 10 cm square
//! and a Koch curve whose ends lie 9 cm apart.

#![cfg_attr(target_arch = "avr", no_std, no_main)]

#[cfg(target_arch = "avr")]
mod board {
    use panic_halt as _;

    use tortuino::config::{self, RobotConfig};
    use tortuino::hal;
    use tortuino::logger::{Console, Level};
    use tortuino::testing::{standard_suite, TestRunner};
    use tortuino::Tortuino;

    #[avr_device::entry]
    fn main() -> ! {
        let config = RobotConfig::calibrated(config::CALIBRATION);
        let board = match hal::take(&config) {
            Some(board) => board,
            #[allow(clippy::empty_loop)]
            None => loop {},
        };
        let mut robot = Tortuino::with_config(board.parts, config);
        let mut runner = TestRunner::new(Console::new(board.serial, Level::Info));
        let suite = standard_suite();

        loop {
            if robot.begin().is_err() {
                robot.halt();
            }
            runner.run_suite("calibration", &mut robot, &suite);
        }
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {
    eprintln!("calibrate draws the self tests on paper and only runs on the board");
}
