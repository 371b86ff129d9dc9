//! Digital pins of the ATmega328P, addressed by Arduino pin number
//!
//! Pins carry their port at runtime rather than in their type, so the eight
//! stepper coils of both wheels share a single `Pin<Output>` type.

use avr_device::atmega328p::{PORTB, PORTC, PORTD};
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::{InputPin, OutputPin};

pub struct Input;
pub struct Output;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Port {
    B,
    C,
    D,
}

impl Port {
    /// Port and bit behind an Arduino Uno pin number
    pub fn of_digital(pin: u8) -> Option<(Port, u8)> {
        match pin {
            0..=7 => Some((Port::D, pin)),
            8..=13 => Some((Port::B, pin - 8)),
            14..=19 => Some((Port::C, pin - 14)),
            _ => None,
        }
    }
}

macro_rules! update {
    ($PORTX:ident, $reg:ident, $mask:expr, $high:expr) => {
        unsafe {
            (*$PORTX::ptr()).$reg.modify(|r, w| {
                if $high {
                    w.bits(r.bits() | $mask)
                } else {
                    w.bits(r.bits() & !$mask)
                }
            })
        }
    };
}

fn write_ddr(port: Port, mask: u8, output: bool) {
    match port {
        Port::B => update!(PORTB, ddrb, mask, output),
        Port::C => update!(PORTC, ddrc, mask, output),
        Port::D => update!(PORTD, ddrd, mask, output),
    }
}

// Drives the pin when it is an output, toggles the pull-up when it is an input
fn write_port(port: Port, mask: u8, high: bool) {
    match port {
        Port::B => update!(PORTB, portb, mask, high),
        Port::C => update!(PORTC, portc, mask, high),
        Port::D => update!(PORTD, portd, mask, high),
    }
}

fn read_pin(port: Port, mask: u8) -> bool {
    let bits = unsafe {
        match port {
            Port::B => (*PORTB::ptr()).pinb.read().bits(),
            Port::C => (*PORTC::ptr()).pinc.read().bits(),
            Port::D => (*PORTD::ptr()).pind.read().bits(),
        }
    };
    bits & mask != 0
}

#[derive(Debug)]
pub struct Pin<MODE> {
    port: Port,
    mask: u8,
    _mode: PhantomData<MODE>,
}

impl<MODE> Pin<MODE> {
    pub fn port(&self) -> Port {
        self.port
    }
}

impl Pin<Output> {
    /// Output driven low
    pub fn output(pin: u8) -> Option<Self> {
        let (port, bit) = Port::of_digital(pin)?;
        let mask = 1 << bit;
        write_port(port, mask, false);
        write_ddr(port, mask, true);
        Some(Self {
            port,
            mask,
            _mode: PhantomData,
        })
    }
}

impl Pin<Input> {
    /// Input with the internal pull-up enabled
    pub fn input_pull_up(pin: u8) -> Option<Self> {
        let (port, bit) = Port::of_digital(pin)?;
        let mask = 1 << bit;
        write_ddr(port, mask, false);
        write_port(port, mask, true);
        Some(Self {
            port,
            mask,
            _mode: PhantomData,
        })
    }
}

impl OutputPin for Pin<Output> {
    type Error = Infallible;

    #[inline]
    fn set_high(&mut self) -> Result<(), Infallible> {
        write_port(self.port, self.mask, true);
        Ok(())
    }

    #[inline]
    fn set_low(&mut self) -> Result<(), Infallible> {
        write_port(self.port, self.mask, false);
        Ok(())
    }
}

impl InputPin for Pin<Input> {
    type Error = Infallible;

    #[inline]
    fn is_high(&self) -> Result<bool, Infallible> {
        Ok(read_pin(self.port, self.mask))
    }

    #[inline]
    fn is_low(&self) -> Result<bool, Infallible> {
        Ok(!read_pin(self.port, self.mask))
    }
}
