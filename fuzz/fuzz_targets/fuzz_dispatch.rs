//! Fuzz target: hub characteristic dispatch
//!
//! Drives arbitrary `read` / `write` sequences through `Accessory` on a
//! host-simulated LEDC pin and verifies:
//! - No panics for any characteristic, value or flag combination
//! - The pin duty never exceeds the channel maximum
//! - A successful brightness read is always a valid percentage
//!
//! cargo fuzz run fuzz_dispatch

#![no_main]

use embedded_hal::pwm::SetDutyCycle;
use gpio_light::adapters::time::SystemClock;
use gpio_light::app::ports::PwmPin;
use gpio_light::app::service::LightAdapter;
use gpio_light::config::LightConfig;
use gpio_light::drivers::ledc::LedcPwm;
use gpio_light::hap::{Accessory, CharacteristicType, Value};
use libfuzzer_sys::fuzz_target;

const KINDS: [CharacteristicType; 6] = [
    CharacteristicType::Manufacturer,
    CharacteristicType::Model,
    CharacteristicType::Name,
    CharacteristicType::SerialNumber,
    CharacteristicType::On,
    CharacteristicType::Brightness,
];

fuzz_target!(|data: &[u8]| {
    let Some((&flags, ops)) = data.split_first() else {
        return;
    };

    let mut cfg = LightConfig::light("Fuzz");
    cfg.brightness = flags & 0x01 != 0;
    cfg.status = flags & 0x02 != 0;
    cfg.colors = flags & 0x04 != 0;

    let Ok(pin) = LedcPwm::acquire(cfg.pin()) else {
        return;
    };
    let mut light = LightAdapter::new(cfg, pin, SystemClock::new());
    let _ = light.services();

    for op in ops.chunks_exact(3) {
        let kind = KINDS[op[0] as usize % KINDS.len()];
        if op[1] & 0x80 == 0 {
            let result = light.read(kind);
            if kind == CharacteristicType::Brightness {
                if let Ok(Value::Int(level)) = result {
                    assert!((0..=100).contains(&level), "brightness {level} out of range");
                }
            }
        } else {
            let value = match op[1] % 3 {
                0 => Value::Bool(op[2] & 1 != 0),
                1 => Value::Int(i32::from(op[2] as i8)),
                _ => Value::String(String::from_utf8_lossy(&op[2..]).into_owned()),
            };
            let _ = light.write(kind, value);
        }

        let duty = light.pin().duty_cycle().unwrap_or(0);
        assert!(duty <= light.pin().max_duty_cycle());
    }
});
