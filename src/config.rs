//! Accessory configuration
//!
//! Supplied once by the hub as JSON and fixed for the adapter's lifetime.
//! Field names follow the hub's config block; fields the light does not use
//! (`accessory`, `ip`, ...) are ignored.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pins;

/// Longest accessory name the hub accepts.
const MAX_NAME_LEN: usize = 64;

/// Which capability set the accessory exposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceKind {
    Light,
    /// Any other service string; the accessory exposes identity only.
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightConfig {
    #[serde(default)]
    pub service: ServiceKind,
    /// Accessory name shown by the hub.
    pub name: String,
    /// Physical GPIO; `None` or `0` selects [`pins::DEFAULT_LIGHT_GPIO`].
    #[serde(default)]
    pub pin: Option<u8>,
    /// Register the Brightness characteristic.
    #[serde(default)]
    pub brightness: bool,
    /// Allow the hub to read back power state (otherwise On is write-only).
    #[serde(default)]
    pub status: bool,
    /// Hue/saturation request.  Accepted but not wired: a single PWM
    /// channel cannot render colour.
    #[serde(default)]
    pub colors: bool,
    #[serde(default = "default_manufacturer")]
    pub manufacturer: String,
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_manufacturer() -> String {
    "gpio-light".to_owned()
}

fn default_model() -> String {
    concat!("gpio-light/", env!("CARGO_PKG_VERSION")).to_owned()
}

impl LightConfig {
    /// Minimal configuration: a named light with no optional capabilities.
    pub fn light(name: &str) -> Self {
        Self {
            service: ServiceKind::Light,
            name: name.to_owned(),
            pin: None,
            brightness: false,
            status: false,
            colors: false,
            manufacturer: default_manufacturer(),
            model: default_model(),
        }
    }

    /// Parse the hub's JSON config block and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json).map_err(|e| {
            warn!("LightConfig: rejected JSON ({})", e);
            ConfigError::Malformed
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// GPIO the light drives.
    pub fn pin(&self) -> u8 {
        match self.pin {
            Some(pin) if pin != 0 => pin,
            _ => pins::DEFAULT_LIGHT_GPIO,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationFailed("name must not be empty"));
        }
        if self.name.len() > MAX_NAME_LEN {
            return Err(ConfigError::ValidationFailed("name must be at most 64 bytes"));
        }
        if self.pin() >= pins::GPIO_COUNT {
            return Err(ConfigError::ValidationFailed("pin must be a GPIO of this chip"));
        }
        Ok(())
    }
}
