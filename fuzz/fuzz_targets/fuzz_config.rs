//! Fuzz target: `LightConfig::from_json`
//!
//! Feeds arbitrary bytes to the configuration parser and verifies:
//! - No panics on malformed or hostile JSON
//! - Any accepted config also passes `validate()` and resolves a usable pin
//!
//! cargo fuzz run fuzz_config

#![no_main]

use gpio_light::config::LightConfig;
use gpio_light::pins::GPIO_COUNT;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = core::str::from_utf8(data) else {
        return;
    };

    if let Ok(cfg) = LightConfig::from_json(json) {
        assert!(cfg.validate().is_ok(), "accepted config fails validation");
        assert!(cfg.pin() < GPIO_COUNT, "resolved pin {} out of range", cfg.pin());
        assert!(!cfg.name.trim().is_empty());
    }
});
