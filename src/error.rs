//! Unified error types for the light accessory.
//!
//! Every accessory operation funnels into [`Error`]; config parsing reports
//! [`ConfigError`] on its own.  The two kinds the hub cares about are kept
//! apart: a *configuration* error means the caller used a capability the
//! accessory was not configured for, a *hardware* error is the pin driver's
//! failure passed through unchanged.

use core::fmt;

use crate::hap::{Access, CharacteristicType};

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A capability was used that the configuration did not enable.
    NotEnabled(&'static str),
    /// The PWM pin driver failed.
    Hardware(PinError),
    /// The hub asked for an access the accessory's wiring does not expose.
    Unsupported {
        characteristic: CharacteristicType,
        access: Access,
    },
    /// The hub supplied a value of the wrong format for a characteristic.
    InvalidValue(CharacteristicType),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnabled(what) => write!(f, "no '{what}' defined in configuration"),
            Self::Hardware(e) => write!(f, "hardware: {e}"),
            Self::Unsupported {
                characteristic,
                access,
            } => write!(f, "{characteristic:?} does not support {access:?}"),
            Self::InvalidValue(c) => write!(f, "invalid value for {c:?}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The hub's JSON did not deserialize into a light configuration.
    Malformed,
    /// A field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "malformed configuration"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
        }
    }
}

impl core::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Pin driver errors
// ---------------------------------------------------------------------------

/// Failures reported by a PWM pin driver.  Return codes are the driver's own
/// (`esp_err_t` on ESP-IDF) and are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinError {
    /// The GPIO number does not exist on this chip.
    InvalidPin(u8),
    /// The PWM channel is already driving the given GPIO for another handle.
    Busy(u8),
    /// Timer or channel configuration was rejected.
    ConfigFailed(i32),
    /// The duty register could not be read.
    ReadFailed(i32),
    /// The duty register could not be written.
    WriteFailed(i32),
}

impl fmt::Display for PinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPin(pin) => write!(f, "GPIO {pin} does not exist"),
            Self::Busy(pin) => write!(f, "PWM channel already drives GPIO {pin}"),
            Self::ConfigFailed(rc) => write!(f, "PWM config failed (rc={rc})"),
            Self::ReadFailed(rc) => write!(f, "PWM duty read failed (rc={rc})"),
            Self::WriteFailed(rc) => write!(f, "PWM duty write failed (rc={rc})"),
        }
    }
}

impl core::error::Error for PinError {}

impl embedded_hal::pwm::Error for PinError {
    fn kind(&self) -> embedded_hal::pwm::ErrorKind {
        embedded_hal::pwm::ErrorKind::Other
    }
}

impl From<PinError> for Error {
    fn from(e: PinError) -> Self {
        Self::Hardware(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
