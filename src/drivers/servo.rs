//! Hobby servo on a 50 Hz PWM channel, and the pen lifter built on it
//!
//! Angles map linearly onto pulse widths of 544..=2400 µs inside a 20 ms
//! period, the same range the Arduino servo library uses, so the empirically
//! tuned pen angles carry over unchanged.

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::PwmPin;

use crate::diagnostics::Error;

const MIN_PULSE_US: u32 = 544;
const MAX_PULSE_US: u32 = 2400;
const PERIOD_US: u32 = 20_000;
const MAX_ANGLE: u8 = 180;

pub struct Servo<P> {
    channel: P,
    max_duty: u16,
    angle: Option<u8>,
}

impl<P: PwmPin<Duty = u16>> Servo<P> {
    /// Enable the channel. The channel must already run at 50 Hz.
    pub fn attach(mut channel: P) -> Self {
        channel.enable();
        let max_duty = channel.get_max_duty();
        Self {
            channel,
            max_duty,
            angle: None,
        }
    }

    /// Pulse width for an angle, clamped to 0..=180 degrees
    pub fn pulse_us(angle: u8) -> u32 {
        let angle = angle.min(MAX_ANGLE) as u32;
        MIN_PULSE_US + (MAX_PULSE_US - MIN_PULSE_US) * angle / MAX_ANGLE as u32
    }

    pub fn duty_for(&self, angle: u8) -> u16 {
        (self.max_duty as u32 * Self::pulse_us(angle) / PERIOD_US) as u16
    }

    pub fn write(&mut self, angle: u8) {
        let duty = self.duty_for(angle);
        self.channel.set_duty(duty);
        self.angle = Some(angle.min(MAX_ANGLE));
    }

    /// Last commanded angle
    pub fn angle(&self) -> Option<u8> {
        self.angle
    }

    pub fn detach(mut self) -> P {
        self.channel.disable();
        self.channel
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PenState {
    Up,
    Down,
}

pub struct Pen<P> {
    servo: Servo<P>,
    up_angle: u8,
    down_angle: u8,
    settle_ms: u16,
    state: Option<PenState>,
}

impl<P: PwmPin<Duty = u16>> Pen<P> {
    pub fn new(servo: Servo<P>, up_angle: u8, down_angle: u8, settle_ms: u16) -> Self {
        Self {
            servo,
            up_angle,
            down_angle,
            settle_ms,
            state: None,
        }
    }

    pub fn raise<D: DelayMs<u16>>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.set(PenState::Up, delay)
    }

    pub fn lower<D: DelayMs<u16>>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.set(PenState::Down, delay)
    }

    /// Command a position and block until the servo has had time to reach it.
    /// Sent even when the pen is already in that position.
    pub fn set<D: DelayMs<u16>>(&mut self, state: PenState, delay: &mut D) -> Result<(), Error> {
        let angle = match state {
            PenState::Up => self.up_angle,
            PenState::Down => self.down_angle,
        };
        if self.servo.max_duty == 0 {
            return Err(Error::Servo);
        }
        self.servo.write(angle);
        delay.delay_ms(self.settle_ms);
        self.state = Some(state);
        Ok(())
    }

    /// `None` until the first command
    pub fn state(&self) -> Option<PenState> {
        self.state
    }

    pub fn release(self) -> Servo<P> {
        self.servo
    }
}
