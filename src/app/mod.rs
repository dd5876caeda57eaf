//! Application core — the light adapter, zero direct I/O.
//!
//! All interaction with hardware happens through the **port traits** in
//! [`ports`], keeping the adapter testable without real peripherals.

pub mod ports;
pub mod service;
