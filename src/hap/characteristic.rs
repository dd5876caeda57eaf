//! Characteristic descriptors: the hub-side declaration of one property.

use serde::{Deserialize, Serialize};

/// Characteristic kinds this accessory can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacteristicType {
    Manufacturer,
    Model,
    Name,
    SerialNumber,
    On,
    Brightness,
}

/// Direction of a characteristic access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Access {
    Read,
    Write,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    pub read: bool,
    pub write: bool,
}

impl Permissions {
    pub const READ: Self = Self {
        read: true,
        write: false,
    };
    pub const WRITE: Self = Self {
        read: false,
        write: true,
    };
    pub const READ_WRITE: Self = Self {
        read: true,
        write: true,
    };

    pub const fn allows(self, access: Access) -> bool {
        match access {
            Access::Read => self.read,
            Access::Write => self.write,
        }
    }
}

/// A characteristic value exchanged with the hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i32),
    String(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Characteristic {
    pub kind: CharacteristicType,
    pub perms: Permissions,
    /// Static value held by the hub.  `None` for characteristics served by
    /// the accessory's read handler.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl Characteristic {
    /// A characteristic whose reads and writes are routed to the accessory.
    pub fn handled(kind: CharacteristicType, perms: Permissions) -> Self {
        Self {
            kind,
            perms,
            value: None,
        }
    }

    /// A read-only characteristic with a fixed value.
    pub fn fixed(kind: CharacteristicType, value: Value) -> Self {
        Self {
            kind,
            perms: Permissions::READ,
            value: Some(value),
        }
    }
}
