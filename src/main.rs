#![cfg_attr(target_arch = "avr", no_std, no_main)]

use tortuino::logger::Level;

fn log_level() -> Level {
    if cfg!(feature = "debug") {
        Level::Debug
    } else {
        Level::Info
    }
}

#[cfg(target_arch = "avr")]
mod firmware {
    use panic_halt as _;

    use tortuino::config::{self, RobotConfig};
    use tortuino::hal;
    use tortuino::logger::Console;
    use tortuino::{Application, Tortuino};

    #[avr_device::entry]
    fn main() -> ! {
        let config = RobotConfig::calibrated(config::CALIBRATION);
        let board = match hal::take(&config) {
            Some(board) => board,
            #[allow(clippy::empty_loop)]
            None => loop {},
        };

        let robot = Tortuino::with_config(board.parts, config);
        let console = Console::new(board.serial, super::log_level());
        Application::new(console, config::DRAWING).start(robot)
    }
}

/// Log console over the process output
#[cfg(not(target_arch = "avr"))]
struct Stdout(std::io::Stdout);

#[cfg(not(target_arch = "avr"))]
impl ufmt::uWrite for Stdout {
    type Error = std::io::Error;

    fn write_str(&mut self, s: &str) -> Result<(), std::io::Error> {
        use std::io::Write;
        self.0.write_all(s.as_bytes())
    }
}

/// Off the board, trace the configured drawing on the simulator
#[cfg(not(target_arch = "avr"))]
fn main() {
    use tortuino::config;
    use tortuino::logger::Console;
    use tortuino::sim::{Segment, Simulator};

    let mut console = Console::new(Stdout(std::io::stdout()), log_level());
    let drawing = config::DRAWING;
    console.value(Level::Info, "drawing", drawing.name());

    let mut sim = Simulator::new(|segment: Segment| {
        console.point(Level::Debug, "line to", segment.to.x, segment.to.y)
    });
    match drawing.draw(&mut sim) {
        Ok(()) => {}
        Err(never) => match never {},
    }
    let stats = *sim.stats();
    drop(sim);

    console.value(Level::Info, "segments", &stats.segments);
    console.length(Level::Info, "drawn", stats.drawn_cm);
    console.length(Level::Info, "travel", stats.travel_cm);
    console.value(Level::Info, "pen lifts", &stats.pen_lifts);
    console.length(Level::Info, "width", stats.width());
    console.length(Level::Info, "height", stats.height());
}
