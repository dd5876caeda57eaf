//! GPIO / PWM parameters for the light output.
//!
//! Single source of truth for the pin the light drives when configuration
//! leaves it unset, and for the LEDC resources the driver claims.

/// GPIO driven when the configuration does not name one.
pub const DEFAULT_LIGHT_GPIO: u8 = 1;

/// Number of GPIOs on the target (ESP32-S3: GPIO0–GPIO48).
pub const GPIO_COUNT: u8 = 49;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits).  8-bit gives 0 – 255 duty levels.
pub const PWM_RESOLUTION_BITS: u32 = 8;
/// Full-on duty at [`PWM_RESOLUTION_BITS`].
pub const DUTY_MAX: u8 = u8::MAX;
/// LEDC base frequency for the light (1 kHz — flicker-free for LED drivers).
pub const LIGHT_PWM_FREQ_HZ: u32 = 1_000;
/// LEDC channel and timer reserved for the light.
pub const LEDC_CH_LIGHT: u32 = 0;
pub const LEDC_TIMER_LIGHT: u32 = 0;
