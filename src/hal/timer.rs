//! Busy-wait delays on a free-running Timer0

use avr_device::atmega328p::TC0;
use embedded_hal::blocking::delay::{DelayMs, DelayUs};

use crate::config::CPU_FREQ_HZ;

// CS01 | CS00: clk/64
const PRESCALER_DIV64: u8 = 0x03;

/// Microseconds per Timer0 tick
const US_PER_TICK: u32 = 64 * 1_000_000 / CPU_FREQ_HZ;

pub struct Delay {
    _private: (),
}

impl Delay {
    /// Put Timer0 in normal mode, counting at clk/64
    pub fn new() -> Self {
        unsafe {
            let p = TC0::ptr();
            (*p).tccr0a.write(|w| w.bits(0));
            (*p).tccr0b.write(|w| w.bits(PRESCALER_DIV64));
        }
        Self { _private: () }
    }

    fn counter(&self) -> u8 {
        unsafe { (*TC0::ptr()).tcnt0.read().bits() }
    }

    fn wait_ticks(&mut self, ticks: u32) {
        let mut last = self.counter();
        let mut elapsed = 0u32;
        while elapsed < ticks {
            let now = self.counter();
            elapsed += now.wrapping_sub(last) as u32;
            last = now;
        }
    }
}

impl Default for Delay {
    fn default() -> Self {
        Self::new()
    }
}

impl DelayUs<u32> for Delay {
    fn delay_us(&mut self, us: u32) {
        self.wait_ticks(us / US_PER_TICK);
    }
}

impl DelayMs<u16> for Delay {
    fn delay_ms(&mut self, ms: u16) {
        for _ in 0..ms {
            self.delay_us(1000);
        }
    }
}
