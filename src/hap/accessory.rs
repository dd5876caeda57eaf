//! The accessory contract the hub drives.
//!
//! The hub calls [`Accessory::services`] when it registers a new accessory
//! and [`Accessory::configure`] when it reattaches one restored from its own
//! cache.  Both must leave the accessory wired identically.  Afterwards every
//! hub request is one synchronous call that completes with a value or an
//! error.

use serde::{Deserialize, Serialize};

use super::characteristic::{CharacteristicType, Value};
use super::service::{Service, ServiceType};
use crate::error::Result;

pub trait Accessory {
    /// Service descriptors for fresh registration.
    fn services(&mut self) -> Vec<Service>;

    /// Rewire an accessory the hub restored from its cache.
    fn configure(&mut self, cached: &mut CachedAccessory);

    /// Physical identification request from the user.
    fn identify(&mut self) -> Result<()>;

    /// Serve a read of a handled characteristic.
    fn read(&mut self, characteristic: CharacteristicType) -> Result<Value>;

    /// Apply a write to a handled characteristic.
    ///
    /// Values are checked against the characteristic's hub format and
    /// rejected with `InvalidValue` when out of range; nothing is clamped
    /// here, unlike the adapter's direct setters.
    fn write(&mut self, characteristic: CharacteristicType, value: Value) -> Result<()>;
}

/// An accessory as the hub persisted it between restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedAccessory {
    pub display_name: String,
    #[serde(default)]
    pub reachable: bool,
    pub services: Vec<Service>,
}

impl CachedAccessory {
    pub fn new(display_name: &str, services: Vec<Service>) -> Self {
        Self {
            display_name: display_name.to_owned(),
            reachable: false,
            services,
        }
    }

    pub fn service(&self, kind: ServiceType) -> Option<&Service> {
        self.services.iter().find(|s| s.kind == kind)
    }

    pub fn service_mut(&mut self, kind: ServiceType) -> Option<&mut Service> {
        self.services.iter_mut().find(|s| s.kind == kind)
    }
}
