//! Error handling and diagnostics

use ufmt::derive::uDebug;

/// Numeric families reported over the serial console
#[derive(Debug, Clone, Copy, PartialEq, Eq, uDebug)]
pub enum ErrorCode {
    HardwareFault = 0x1000,
    ConfigurationError = 0x4000,
}

/// Everything that can go wrong while driving the robot
#[derive(Debug, Clone, Copy, PartialEq, Eq, uDebug)]
pub enum Error {
    /// Writing one of the stepper coil pins failed
    Coil,
    /// Sampling the start button failed
    Button,
    /// The pen servo channel refused a command
    Servo,
    /// Stepper speed must be at least one revolution per minute
    InvalidSpeed,
}

impl Error {
    pub fn family(&self) -> ErrorCode {
        match self {
            Error::Coil | Error::Button | Error::Servo => ErrorCode::HardwareFault,
            Error::InvalidSpeed => ErrorCode::ConfigurationError,
        }
    }

    /// Numeric code reported over the serial console: family plus the
    /// variant in the low byte, e.g. `0x1001` for a button fault
    pub fn code(&self) -> u16 {
        let subcode = match self {
            Error::Coil => 0,
            Error::Button => 1,
            Error::Servo => 2,
            Error::InvalidSpeed => 0,
        };
        self.family() as u16 | subcode
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Coil => f.write_str("stepper coil pin write failed"),
            Error::Button => f.write_str("start button read failed"),
            Error::Servo => f.write_str("pen servo command failed"),
            Error::InvalidSpeed => f.write_str("stepper speed must be at least 1 rpm"),
        }
    }
}
