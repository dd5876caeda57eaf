//! Light adapter — the accessory's only stateful component.
//!
//! [`LightAdapter`] owns the configuration, one [`PwmPin`] and the
//! last-known-state cache.  The hub reaches it through the [`Accessory`]
//! trait; the four operations are also public for direct callers.
//!
//! ```text
//!  Hub ──▶ ┌───────────────────────────┐ ──▶ PwmPin (duty 0–255)
//!          │        LightAdapter        │
//!          │  config · cache · wiring   │ ──▶ ClockPort (serial)
//!          └───────────────────────────┘
//! ```
//!
//! The cache is written only after the pin accepts a write, so it never
//! runs ahead of the hardware.

use core::fmt::Write as _;

use embedded_hal::pwm::SetDutyCycle as _;
use log::{info, warn};

use crate::config::{LightConfig, ServiceKind};
use crate::error::{Error, PinError, Result};
use crate::hap::{
    Access, Accessory, CachedAccessory, CharacteristicType, Permissions, Service, ServiceType,
    Value,
};

use super::ports::{ClockPort, PwmPin};

/// Serial-number string: Unix milliseconds, at most 20 digits.
pub type SerialString = heapless::String<20>;

/// Characteristics a Lightbulb service may carry, in wiring order.
const LIGHTBULB_CHARACTERISTICS: [CharacteristicType; 2] =
    [CharacteristicType::On, CharacteristicType::Brightness];

// ───────────────────────────────────────────────────────────────
// Cache
// ───────────────────────────────────────────────────────────────

/// Last successfully commanded state.  Empty until the first set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LightCache {
    pub power: Option<bool>,
    /// Duty cycle in pin units (`0..=max_duty_cycle`).
    pub brightness: Option<u16>,
}

// ───────────────────────────────────────────────────────────────
// LightAdapter
// ───────────────────────────────────────────────────────────────

pub struct LightAdapter<P, C> {
    config: LightConfig,
    pin: P,
    clock: C,
    cache: LightCache,
    /// Display names of accessories reattached from the hub cache.
    restored: Vec<String>,
}

impl<P: PwmPin, C: ClockPort> LightAdapter<P, C> {
    /// Take ownership of an acquired pin.  Acquisition itself is the
    /// caller's job; failing it aborts startup.
    pub fn new(config: LightConfig, pin: P, clock: C) -> Self {
        info!(
            "GPIO light '{}' on pin {} (service={:?}, brightness={}, status={})",
            config.name,
            config.pin(),
            config.service,
            config.brightness,
            config.status
        );
        if config.colors {
            warn!("'colors' ignored: a single PWM channel cannot render hue/saturation");
        }
        Self {
            config,
            pin,
            clock,
            cache: LightCache::default(),
            restored: Vec::new(),
        }
    }

    // ── Power ─────────────────────────────────────────────────

    /// `true` when the pin's duty cycle is non-zero.
    pub fn get_power_state(&mut self) -> Result<bool> {
        let duty = self
            .pin
            .duty_cycle()
            .map_err(|e| hardware_fault("get_power_state", e))?;
        let on = duty > 0;
        info!("Power is currently {}", if on { "ON" } else { "OFF" });
        Ok(on)
    }

    /// Drive the pin fully on or fully off.
    pub fn set_power_state(&mut self, on: bool) -> Result<()> {
        let written = if on {
            self.pin.set_duty_cycle_fully_on()
        } else {
            self.pin.set_duty_cycle_fully_off()
        };
        written.map_err(|e| hardware_fault("set_power_state", e))?;

        let duty = if on { self.pin.max_duty_cycle() } else { 0 };
        self.cache = LightCache {
            power: Some(on),
            brightness: Some(duty),
        };
        info!("Power set to {}", if on { "ON" } else { "OFF" });
        Ok(())
    }

    // ── Brightness ────────────────────────────────────────────

    /// Brightness in percent: live duty if the pin can be read, else the
    /// cached duty, else zero.
    pub fn get_brightness(&mut self) -> Result<u8> {
        self.require_brightness()?;

        let live = match self.pin.duty_cycle() {
            Ok(duty) => Some(duty),
            Err(e) => {
                warn!("get_brightness() live read failed: {}; using cache", e);
                None
            }
        };
        let duty = live.or(self.cache.brightness).unwrap_or(0);
        let level = duty_to_percent(duty, self.pin.max_duty_cycle());
        info!("Brightness is currently at {} %", level);
        Ok(level)
    }

    /// Set brightness in percent; values above 100 are clamped.
    pub fn set_brightness(&mut self, level: u8) -> Result<()> {
        self.require_brightness()?;

        let level = level.min(100);
        let duty = percent_to_duty(level, self.pin.max_duty_cycle());
        self.pin
            .set_duty_cycle(duty)
            .map_err(|e| hardware_fault("set_brightness", e))?;

        self.cache.brightness = Some(duty);
        info!("set_brightness() successfully set to {} %", level);
        Ok(())
    }

    // ── Descriptors ───────────────────────────────────────────

    /// Identity descriptor plus, for a light, the wired Lightbulb.
    pub fn build_services(&self) -> Vec<Service> {
        let mut services = vec![self.information_service()];
        if self.config.service == ServiceKind::Light {
            info!("Creating Lightbulb");
            let mut bulb = Service::new(ServiceType::Lightbulb, &self.config.name);
            self.wire_lightbulb(&mut bulb);
            services.push(bulb);
        }
        services
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn config(&self) -> &LightConfig {
        &self.config
    }

    pub fn cache(&self) -> LightCache {
        self.cache
    }

    /// Accessories reattached through [`Accessory::configure`].
    pub fn restored_accessories(&self) -> &[String] {
        &self.restored
    }

    /// Borrow the pin (diagnostics and tests).
    pub fn pin(&self) -> &P {
        &self.pin
    }

    // ── Internal ──────────────────────────────────────────────

    fn require_brightness(&self) -> Result<()> {
        if self.config.brightness {
            Ok(())
        } else {
            warn!("Ignoring request; No 'brightness' defined.");
            Err(Error::NotEnabled("brightness"))
        }
    }

    fn information_service(&self) -> Service {
        // u64::MAX is 20 digits, so the write always fits.
        let mut serial = SerialString::new();
        let written = write!(serial, "{}", self.clock.unix_millis());
        debug_assert!(written.is_ok());

        Service::new(ServiceType::AccessoryInformation, &self.config.name)
            .with_fixed(
                CharacteristicType::Manufacturer,
                Value::String(self.config.manufacturer.clone()),
            )
            .with_fixed(
                CharacteristicType::Model,
                Value::String(self.config.model.clone()),
            )
            .with_fixed(
                CharacteristicType::Name,
                Value::String(self.config.name.clone()),
            )
            .with_fixed(
                CharacteristicType::SerialNumber,
                Value::String(serial.as_str().to_owned()),
            )
    }

    /// Permissions the configuration grants `kind`; `None` means unwired.
    fn permissions(&self, kind: CharacteristicType) -> Option<Permissions> {
        if self.config.service != ServiceKind::Light {
            return None;
        }
        match kind {
            CharacteristicType::On if self.config.status => Some(Permissions::READ_WRITE),
            CharacteristicType::On => Some(Permissions::WRITE),
            CharacteristicType::Brightness if self.config.brightness => {
                Some(Permissions::READ_WRITE)
            }
            _ => None,
        }
    }

    /// The single wiring routine shared by fresh registration and reattach.
    fn wire_lightbulb(&self, bulb: &mut Service) {
        for kind in LIGHTBULB_CHARACTERISTICS {
            match self.permissions(kind) {
                Some(perms) => {
                    if kind == CharacteristicType::Brightness {
                        info!("... Adding Brightness");
                    }
                    bulb.wire(kind, perms);
                }
                None => bulb.unwire(kind),
            }
        }
    }

    fn check_access(&self, kind: CharacteristicType, access: Access) -> Result<()> {
        match self.permissions(kind) {
            Some(perms) if perms.allows(access) => Ok(()),
            _ => Err(Error::Unsupported {
                characteristic: kind,
                access,
            }),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Hub contract
// ───────────────────────────────────────────────────────────────

impl<P: PwmPin, C: ClockPort> Accessory for LightAdapter<P, C> {
    fn services(&mut self) -> Vec<Service> {
        self.build_services()
    }

    fn configure(&mut self, cached: &mut CachedAccessory) {
        info!("{}: Configure Accessory", cached.display_name);
        cached.reachable = true;
        if let Some(bulb) = cached.service_mut(ServiceType::Lightbulb) {
            self.wire_lightbulb(bulb);
        }
        self.restored.push(cached.display_name.clone());
    }

    fn identify(&mut self) -> Result<()> {
        info!("Identify requested!");
        Ok(())
    }

    fn read(&mut self, characteristic: CharacteristicType) -> Result<Value> {
        self.check_access(characteristic, Access::Read)?;
        match characteristic {
            CharacteristicType::On => self.get_power_state().map(Value::Bool),
            CharacteristicType::Brightness => {
                self.get_brightness().map(|level| Value::Int(i32::from(level)))
            }
            _ => Err(Error::Unsupported {
                characteristic,
                access: Access::Read,
            }),
        }
    }

    fn write(&mut self, characteristic: CharacteristicType, value: Value) -> Result<()> {
        self.check_access(characteristic, Access::Write)?;
        match (characteristic, value) {
            (CharacteristicType::On, Value::Bool(on)) => self.set_power_state(on),
            // Some controllers send On as 0/1.
            (CharacteristicType::On, Value::Int(n @ (0 | 1))) => self.set_power_state(n == 1),
            // Strict Percentage range; only the direct setter clamps.
            (CharacteristicType::Brightness, Value::Int(level)) if (0..=100).contains(&level) => {
                self.set_brightness(level as u8)
            }
            _ => Err(Error::InvalidValue(characteristic)),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Helpers
// ───────────────────────────────────────────────────────────────

/// Log a driver failure with its operation and wrap it unchanged.
fn hardware_fault(op: &'static str, e: PinError) -> Error {
    warn!("{}() failed: {}", op, e);
    Error::Hardware(e)
}

/// `round(level * max / 100)`.
pub fn percent_to_duty(level: u8, max_duty: u16) -> u16 {
    let level = u32::from(level.min(100));
    ((level * u32::from(max_duty) + 50) / 100) as u16
}

/// `round(duty * 100 / max)`, saturating at 100.
pub fn duty_to_percent(duty: u16, max_duty: u16) -> u8 {
    if max_duty == 0 {
        return 0;
    }
    let max = u32::from(max_duty);
    let duty = u32::from(duty.min(max_duty));
    ((duty * 100 + max / 2) / max) as u8
}
