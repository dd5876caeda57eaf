//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter / driver  | Implements | Connects to              |
//! |-------------------|------------|--------------------------|
//! | `drivers::ledc`   | PwmPin     | ESP32 LEDC / in-memory   |
//! | `time`            | ClockPort  | newlib / `SystemTime`    |

pub mod time;
