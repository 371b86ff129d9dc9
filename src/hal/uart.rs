//! Blocking transmit-only USART0, used as the log console

use avr_device::atmega328p::USART0;
use core::convert::Infallible;
use ufmt::uWrite;

use crate::config::{CPU_FREQ_HZ, UART_BAUD};

const UBRR: u16 = (CPU_FREQ_HZ / (16 * UART_BAUD) - 1) as u16;

// UDRE0 in UCSR0A
const DATA_REGISTER_EMPTY: u8 = 1 << 5;
// TXEN0 in UCSR0B
const TX_ENABLE: u8 = 1 << 3;
// UCSZ01 | UCSZ00: 8N1
const FRAME_8N1: u8 = 0x06;

pub struct Serial {
    _private: (),
}

impl Serial {
    pub fn new() -> Self {
        unsafe {
            let p = USART0::ptr();
            (*p).ubrr0.write(|w| w.bits(UBRR));
            (*p).ucsr0c.write(|w| w.bits(FRAME_8N1));
            (*p).ucsr0b.write(|w| w.bits(TX_ENABLE));
        }
        Self { _private: () }
    }

    pub fn write_byte(&mut self, byte: u8) {
        unsafe {
            let p = USART0::ptr();
            while (*p).ucsr0a.read().bits() & DATA_REGISTER_EMPTY == 0 {}
            (*p).udr0.write(|w| w.bits(byte));
        }
    }
}

impl Default for Serial {
    fn default() -> Self {
        Self::new()
    }
}

impl uWrite for Serial {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
        Ok(())
    }
}
