use embedded_hal::digital::v2::InputPin;

use crate::diagnostics::Error;

/// Deferred-start button. With the pull-up enabled the pin reads high at
/// rest, so a press-and-release shows up as a low sample followed by a high one.
pub struct StartButton<P> {
    pin: P,
    last_high: Option<bool>,
}

impl<P: InputPin> StartButton<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            last_high: None,
        }
    }

    /// Take the reference sample the next `poll` compares against
    pub fn arm(&mut self) -> Result<(), Error> {
        self.last_high = Some(self.sample()?);
        Ok(())
    }

    /// Completes on a low-to-high transition between two consecutive samples.
    /// An unarmed button arms itself and reports `WouldBlock`.
    pub fn poll(&mut self) -> nb::Result<(), Error> {
        let high = self.sample()?;
        match self.last_high.replace(high) {
            Some(false) if high => {
                self.last_high = None;
                Ok(())
            }
            _ => Err(nb::Error::WouldBlock),
        }
    }

    pub fn is_armed(&self) -> bool {
        self.last_high.is_some()
    }

    fn sample(&self) -> Result<bool, Error> {
        self.pin.is_high().map_err(|_| Error::Button)
    }

    pub fn release(self) -> P {
        self.pin
    }
}
