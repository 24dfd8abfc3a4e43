//! Error types for shell operations

use core::fmt;

/// Errors returned by the fallible shell operations.
///
/// Only setup-time and input-boundary mistakes are reported. Conditions that
/// arise while a line is being dispatched (unknown command, odd quoting, a
/// line longer than the buffer) are not errors and never show up here.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// An empty command name or an empty input slice was supplied.
    InvalidParameter,
    /// The dynamic command table is already full.
    OutOfMemory,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter => f.write_str("invalid parameter"),
            Error::OutOfMemory => f.write_str("command table full"),
        }
    }
}

impl core::error::Error for Error {}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::InvalidParameter => defmt::write!(f, "InvalidParameter"),
            Error::OutOfMemory => defmt::write!(f, "OutOfMemory"),
        }
    }
}
