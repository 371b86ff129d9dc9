//! Serial console logging
//!
//! Lines are tagged with their level and written through `ufmt`, which keeps
//! formatting code small enough for an 8-bit target. A console has no way to
//! report its own write failures, so they are dropped.

use ufmt::{uDisplay, uWrite, uwrite, uwriteln};

use crate::diagnostics::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Error = 0,
    Info = 1,
    Debug = 2,
}

impl Level {
    fn tag(&self) -> &'static str {
        match self {
            Level::Error => "[ERR] ",
            Level::Info => "[INF] ",
            Level::Debug => "[DBG] ",
        }
    }
}

pub struct Console<W> {
    writer: W,
    max_level: Level,
}

impl<W: uWrite> Console<W> {
    pub fn new(writer: W, max_level: Level) -> Self {
        Self { writer, max_level }
    }

    pub fn enabled(&self, level: Level) -> bool {
        level <= self.max_level
    }

    pub fn set_max_level(&mut self, level: Level) {
        self.max_level = level;
    }

    pub fn info(&mut self, msg: &str) {
        self.line(Level::Info, msg);
    }

    pub fn debug(&mut self, msg: &str) {
        self.line(Level::Debug, msg);
    }

    /// Labelled value, e.g. `[DBG] steps: 2048`
    pub fn value<V: uDisplay + ?Sized>(&mut self, level: Level, label: &str, value: &V) {
        if self.enabled(level) {
            uwriteln!(self.writer, "{}{}: {}", level.tag(), label, value).ok();
        }
    }

    /// `label: part/whole`, for tallies
    pub fn ratio(&mut self, level: Level, label: &str, part: u32, whole: u32) {
        if self.enabled(level) {
            uwriteln!(self.writer, "{}{}: {}/{}", level.tag(), label, part, whole).ok();
        }
    }

    /// Length in centimeters with two decimals, e.g. `[DBG] radius: 5.65 cm`
    pub fn length(&mut self, level: Level, label: &str, cm: f32) {
        if self.enabled(level) {
            uwrite!(self.writer, "{}{}: ", level.tag(), label).ok();
            write_centimeters(&mut self.writer, cm);
            uwriteln!(self.writer, " cm").ok();
        }
    }

    /// Position on the paper, e.g. `[DBG] line to: (3.00, -4.50) cm`
    pub fn point(&mut self, level: Level, label: &str, x: f32, y: f32) {
        if self.enabled(level) {
            uwrite!(self.writer, "{}{}: (", level.tag(), label).ok();
            write_centimeters(&mut self.writer, x);
            uwrite!(self.writer, ", ").ok();
            write_centimeters(&mut self.writer, y);
            uwriteln!(self.writer, ") cm").ok();
        }
    }

    /// Error line carrying the raw diagnostic code in hex
    pub fn error(&mut self, context: &str, error: Error) {
        if self.enabled(Level::Error) {
            uwrite!(self.writer, "{}{}: {:?} (0x", Level::Error.tag(), context, error).ok();
            write_hex(&mut self.writer, error.code());
            uwriteln!(self.writer, ")").ok();
        }
    }

    pub fn line(&mut self, level: Level, msg: &str) {
        if self.enabled(level) {
            uwriteln!(self.writer, "{}{}", level.tag(), msg).ok();
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

// ufmt has no float support; rounds to hundredths
fn write_centimeters<W: uWrite>(writer: &mut W, cm: f32) {
    let (sign, magnitude) = if cm < 0.0 { ("-", -cm) } else { ("", cm) };
    let hundredths = (magnitude * 100.0 + 0.5) as u32;
    let fraction = hundredths % 100;
    let pad = if fraction < 10 { "0" } else { "" };
    uwrite!(writer, "{}{}.{}{}", sign, hundredths / 100, pad, fraction).ok();
}

fn write_hex<W: uWrite>(writer: &mut W, value: u16) {
    const HEX_CHARS: [u8; 16] = *b"0123456789ABCDEF";
    for shift in [12u16, 8, 4, 0] {
        let digit = HEX_CHARS[((value >> shift) & 0xF) as usize];
        writer.write_char(digit as char).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    #[test]
    fn lines_carry_level_tags() {
        let mut console = Console::new(Capture(String::new()), Level::Info);
        console.info("Ready");
        console.value(Level::Info, "steps", &2048u32);
        assert_eq!(console.into_inner().0, "[INF] Ready\n[INF] steps: 2048\n");
    }

    #[test]
    fn debug_is_filtered_by_default_level() {
        let mut console = Console::new(Capture(String::new()), Level::Info);
        console.debug("hidden");
        console.value(Level::Debug, "rpm", &10u16);
        assert!(!console.enabled(Level::Debug));
        console.set_max_level(Level::Debug);
        console.debug("shown");
        assert_eq!(console.into_inner().0, "[DBG] shown\n");
    }

    #[test]
    fn lengths_print_two_decimals() {
        let mut console = Console::new(Capture(String::new()), Level::Debug);
        console.length(Level::Debug, "radius", 5.65);
        console.length(Level::Info, "gap", 0.05);
        console.point(Level::Debug, "line to", 3.0, -4.5);
        assert_eq!(
            console.into_inner().0,
            "[DBG] radius: 5.65 cm\n[INF] gap: 0.05 cm\n[DBG] line to: (3.00, -4.50) cm\n"
        );
    }

    #[test]
    fn errors_print_their_code() {
        let mut console = Console::new(Capture(String::new()), Level::Error);
        console.info("hidden");
        console.error("wait", Error::Button);
        assert_eq!(console.into_inner().0, "[ERR] wait: Button (0x1001)\n");
    }
}
