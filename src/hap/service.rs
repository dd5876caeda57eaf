//! Service descriptors: a named group of characteristics.

use serde::{Deserialize, Serialize};

use super::characteristic::{Characteristic, CharacteristicType, Permissions, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    AccessoryInformation,
    Lightbulb,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub kind: ServiceType,
    pub name: String,
    pub characteristics: Vec<Characteristic>,
}

impl Service {
    pub fn new(kind: ServiceType, name: &str) -> Self {
        Self {
            kind,
            name: name.to_owned(),
            characteristics: Vec::new(),
        }
    }

    /// Builder form of [`set_fixed`](Self::set_fixed).
    #[must_use]
    pub fn with_fixed(mut self, kind: CharacteristicType, value: Value) -> Self {
        self.set_fixed(kind, value);
        self
    }

    /// Set a read-only static value, replacing any existing entry.
    pub fn set_fixed(&mut self, kind: CharacteristicType, value: Value) {
        self.upsert(Characteristic::fixed(kind, value));
    }

    /// Route `kind` to the accessory with `perms`, replacing any existing
    /// entry so repeated wiring never duplicates a characteristic.
    pub fn wire(&mut self, kind: CharacteristicType, perms: Permissions) {
        self.upsert(Characteristic::handled(kind, perms));
    }

    /// Drop `kind` from the service if present.
    pub fn unwire(&mut self, kind: CharacteristicType) {
        self.characteristics.retain(|c| c.kind != kind);
    }

    pub fn characteristic(&self, kind: CharacteristicType) -> Option<&Characteristic> {
        self.characteristics.iter().find(|c| c.kind == kind)
    }

    fn upsert(&mut self, characteristic: Characteristic) {
        match self
            .characteristics
            .iter_mut()
            .find(|c| c.kind == characteristic.kind)
        {
            Some(existing) => *existing = characteristic,
            None => self.characteristics.push(characteristic),
        }
    }
}
