//! Hub accessory model — services, characteristics and the accessory trait.
//!
//! These are plain descriptors: they carry no handlers.  Reads and writes
//! are dispatched by the hub through [`Accessory::read`] and
//! [`Accessory::write`] on the instance that produced the descriptors.

pub mod accessory;
pub mod characteristic;
pub mod service;

pub use accessory::{Accessory, CachedAccessory};
pub use characteristic::{Access, Characteristic, CharacteristicType, Permissions, Value};
pub use service::{Service, ServiceType};
