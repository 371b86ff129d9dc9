//! 50 Hz servo PWM on Timer1, channel A (OC1A, Arduino pin 9)

use avr_device::atmega328p::TC1;
use embedded_hal::PwmPin;

use super::gpio::{Output, Pin};
use crate::config::CPU_FREQ_HZ;

const PRESCALER: u32 = 8;
const FRAME_HZ: u32 = 50;

/// Timer ticks in one 20 ms servo frame
pub const PERIOD: u16 = (CPU_FREQ_HZ / PRESCALER / FRAME_HZ) as u16;

// COM1A1: clear OC1A on compare match
const COM1A1: u8 = 0x80;
// WGM11 in TCCR1A, WGM13 | WGM12 | CS11 in TCCR1B: fast PWM with ICR1 top, clk/8
const TCCR1A_FAST_ICR: u8 = 0x02;
const TCCR1B_FAST_ICR_DIV8: u8 = 0x1A;

pub struct ServoPwm {
    _pin: Pin<Output>,
    duty: u16,
}

impl ServoPwm {
    /// Start Timer1 with the output disconnected; `enable` connects it
    pub fn new(pin: Pin<Output>) -> Self {
        unsafe {
            let p = TC1::ptr();
            (*p).tccr1a.write(|w| w.bits(TCCR1A_FAST_ICR));
            (*p).icr1.write(|w| w.bits(PERIOD - 1));
            (*p).ocr1a.write(|w| w.bits(0));
            (*p).tccr1b.write(|w| w.bits(TCCR1B_FAST_ICR_DIV8));
        }
        Self { _pin: pin, duty: 0 }
    }
}

impl PwmPin for ServoPwm {
    type Duty = u16;

    fn disable(&mut self) {
        unsafe {
            (*TC1::ptr())
                .tccr1a
                .modify(|r, w| w.bits(r.bits() & !COM1A1));
        }
    }

    fn enable(&mut self) {
        unsafe {
            (*TC1::ptr())
                .tccr1a
                .modify(|r, w| w.bits(r.bits() | COM1A1));
        }
    }

    fn get_duty(&self) -> u16 {
        self.duty
    }

    fn get_max_duty(&self) -> u16 {
        PERIOD
    }

    fn set_duty(&mut self, duty: u16) {
        self.duty = duty.min(PERIOD - 1);
        unsafe {
            (*TC1::ptr()).ocr1a.write(|w| w.bits(self.duty));
        }
    }
}
