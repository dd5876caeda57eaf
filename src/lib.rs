//! gpio-light library.
//!
//! A PWM-driven GPIO light exposed to a smart-home hub as an accessory.
//! All ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module; host builds run the same logic against in-memory
//! backends.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod hap;
pub mod pins;

pub use error::{Error, Result};
