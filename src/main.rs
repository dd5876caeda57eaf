//! gpio-light — ESP-IDF bring-up image.
//!
//! Boots the logger, parses the accessory config baked in at build time
//! (`GPIO_LIGHT_CONFIG`, JSON in the hub's format), claims the PWM pin and
//! registers the accessory.  The hub transport that drives the accessory
//! afterwards lives outside this crate; until it takes over, the image
//! reports power state periodically.
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │  LedcPwm (PwmPin)        SystemClock (ClockPort)  │
//! │  ─────────────── Port Trait Boundary ───────────  │
//! │        LightAdapter  ◀── Accessory ◀── hub        │
//! └──────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::time::Duration;

use anyhow::{Context, Result};
use log::{info, warn};

use gpio_light::adapters::time::SystemClock;
use gpio_light::app::service::LightAdapter;
use gpio_light::config::LightConfig;
use gpio_light::drivers::ledc::LedcPwm;
use gpio_light::hap::Accessory;

/// Used when the image is built without `GPIO_LIGHT_CONFIG`.
const DEFAULT_CONFIG_JSON: &str =
    r#"{"service":"Light","name":"GPIO Light","brightness":true,"status":true}"#;

const STATUS_INTERVAL: Duration = Duration::from_secs(60);

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("gpio-light v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config_json = option_env!("GPIO_LIGHT_CONFIG").unwrap_or(DEFAULT_CONFIG_JSON);
    let config = LightConfig::from_json(config_json).context("accessory config")?;

    // ── 3. Pin acquisition (fatal on failure) ─────────────────
    let pin = config.pin();
    let pwm = LedcPwm::acquire(pin).with_context(|| format!("claiming GPIO {pin}"))?;

    // ── 4. Registration ───────────────────────────────────────
    let mut light = LightAdapter::new(config, pwm, SystemClock::new());
    for service in light.services() {
        match serde_json::to_string(&service) {
            Ok(json) => info!("service {}", json),
            Err(e) => warn!("service {:?} not serialisable: {}", service.kind, e),
        }
    }

    // ── 5. Idle until the hub transport takes over ────────────
    loop {
        std::thread::sleep(STATUS_INTERVAL);
        if let Err(e) = light.get_power_state() {
            warn!("status read failed: {}", e);
        }
    }
}
