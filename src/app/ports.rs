//! Port traits — the boundary between the light adapter and the outside world.
//!
//! ```text
//!   Hub ──▶ Accessory ──▶ LightAdapter ──▶ PwmPin ──▶ LEDC / mock
//!                              └─────────▶ ClockPort
//! ```
//!
//! Driven adapters implement these traits.  The
//! [`LightAdapter`](super::service::LightAdapter) consumes them via generics,
//! so the adapter logic never touches hardware directly.

use embedded_hal::pwm::SetDutyCycle;

use crate::error::PinError;

// ───────────────────────────────────────────────────────────────
// PWM pin port (driven adapter: domain ↔ hardware)
// ───────────────────────────────────────────────────────────────

/// A PWM output the adapter owns exclusively.
///
/// Writes go through `embedded-hal`'s [`SetDutyCycle`]; this trait adds the
/// readback the hub needs to answer power and brightness reads.
pub trait PwmPin: SetDutyCycle<Error = PinError> {
    /// Duty cycle currently held by the peripheral, `0..=max_duty_cycle()`.
    fn duty_cycle(&self) -> Result<u16, PinError>;
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Wall-clock source for identity metadata.
pub trait ClockPort {
    /// Milliseconds since the Unix epoch.
    fn unix_millis(&self) -> u64;
}
