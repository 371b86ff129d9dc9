//! Motion primitives and drawing routines for the Tortuino, a two-stepper
//! drawing robot with a servo pen lifter and a start button.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod drawing;
pub mod drivers;
#[cfg(target_arch = "avr")]
pub mod hal;
pub mod logger;
pub mod robot;
pub mod sim;
pub mod testing;

pub use application::Application;
pub use diagnostics::Error;
pub use drawing::Drawing;
pub use robot::{Parts, Tortuino, Turtle};
pub use sim::Simulator;
