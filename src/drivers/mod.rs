//! Hardware drivers.

pub mod ledc;
