//! Four-wire stepper driver (full-step, two coils energised)

use embedded_hal::digital::v2::OutputPin;

use crate::diagnostics::Error;

/// Coil levels for pins 1..=4, indexed by phase
const PHASES: [[bool; 4]; 4] = [
    [true, false, true, false],
    [false, true, true, false],
    [false, true, false, true],
    [true, false, false, true],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Direction matching the sign of `value`; zero counts as forward
    pub fn of(value: f32) -> Self {
        if value < 0.0 {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

pub struct Stepper<P> {
    pins: [P; 4],
    steps_per_revolution: u16,
    step_number: u16,
    steps_taken: u32,
}

impl<P: OutputPin> Stepper<P> {
    /// Pins are given in the coil order of the sequence, which on the
    /// 28BYJ-48 boards is IN1, IN3, IN2, IN4.
    pub fn new(pins: [P; 4], steps_per_revolution: u16) -> Self {
        Self {
            pins,
            steps_per_revolution: steps_per_revolution.max(1),
            step_number: 0,
            steps_taken: 0,
        }
    }

    /// Move by one step. Timing between steps is up to the caller.
    pub fn step(&mut self, direction: Direction) -> Result<(), Error> {
        self.step_number = match direction {
            Direction::Forward => (self.step_number + 1) % self.steps_per_revolution,
            Direction::Backward => {
                if self.step_number == 0 {
                    self.steps_per_revolution - 1
                } else {
                    self.step_number - 1
                }
            }
        };
        self.steps_taken = self.steps_taken.wrapping_add(1);
        self.energise(self.phase())
    }

    fn energise(&mut self, phase: usize) -> Result<(), Error> {
        for (pin, &high) in self.pins.iter_mut().zip(PHASES[phase].iter()) {
            if high {
                pin.set_high().map_err(|_| Error::Coil)?;
            } else {
                pin.set_low().map_err(|_| Error::Coil)?;
            }
        }
        Ok(())
    }

    /// Position in the coil sequence
    pub fn phase(&self) -> usize {
        (self.step_number % 4) as usize
    }

    pub fn position(&self) -> u16 {
        self.step_number
    }

    /// Steps issued since construction, in either direction
    pub fn steps_taken(&self) -> u32 {
        self.steps_taken
    }

    pub fn release(self) -> [P; 4] {
        self.pins
    }
}
