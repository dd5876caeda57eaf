//! Wall-clock adapter.
//!
//! Implements [`ClockPort`] for the accessory's serial number.
//!
//! - **`target_os = "espidf"`** — `gettimeofday()` from newlib; reads 0 until
//!   SNTP has synced, which still yields a valid (if unhelpful) serial.
//! - **`not(target_os = "espidf")`** — `std::time::SystemTime`.

use crate::app::ports::ClockPort;

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for SystemClock {
    #[cfg(target_os = "espidf")]
    fn unix_millis(&self) -> u64 {
        let mut tv = esp_idf_svc::sys::timeval {
            tv_sec: 0,
            tv_usec: 0,
        };
        // SAFETY: gettimeofday writes into the provided struct only.
        if unsafe { esp_idf_svc::sys::gettimeofday(&mut tv, core::ptr::null_mut()) } != 0 {
            return 0;
        }
        (tv.tv_sec.max(0) as u64) * 1_000 + (tv.tv_usec.max(0) as u64) / 1_000
    }

    #[cfg(not(target_os = "espidf"))]
    fn unix_millis(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_millis() as u64)
    }
}
