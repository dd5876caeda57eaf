//! Integration tests: LightAdapter operations → PWM pin.

use gpio_light::app::service::LightCache;
use gpio_light::error::{Error, PinError};
use gpio_light::hap::{Access, Accessory, CharacteristicType, Value};

use super::mock_hw::light;

// ── Power ─────────────────────────────────────────────────────

#[test]
fn power_round_trips_through_the_pin() {
    let (mut light, tap) = light(false, true);
    for desired in [true, false, true, true, false] {
        light.set_power_state(desired).unwrap();
        assert_eq!(light.get_power_state(), Ok(desired));
    }
    assert_eq!(tap.writes(), vec![255, 0, 255, 255, 0]);
}

#[test]
fn power_on_caches_full_duty_and_off_caches_zero() {
    let (mut light, tap) = light(true, true);

    light.set_power_state(true).unwrap();
    assert_eq!(tap.duty(), 255);
    assert_eq!(
        light.cache(),
        LightCache {
            power: Some(true),
            brightness: Some(255)
        }
    );
    assert_eq!(light.get_brightness(), Ok(100));

    light.set_power_state(false).unwrap();
    assert_eq!(tap.duty(), 0);
    assert_eq!(
        light.cache(),
        LightCache {
            power: Some(false),
            brightness: Some(0)
        }
    );
    assert_eq!(light.get_brightness(), Ok(0));
}

#[test]
fn failed_power_write_leaves_cache_untouched() {
    let (mut light, tap) = light(true, true);
    light.set_power_state(true).unwrap();
    let before = light.cache();

    tap.fail_writes(Some(PinError::WriteFailed(-1)));
    assert_eq!(
        light.set_power_state(false),
        Err(Error::Hardware(PinError::WriteFailed(-1)))
    );
    assert_eq!(light.cache(), before);
    assert_eq!(tap.duty(), 255);
}

#[test]
fn power_read_failure_is_passed_through() {
    let (mut light, tap) = light(false, true);
    tap.fail_reads(Some(PinError::ReadFailed(259)));
    assert_eq!(
        light.get_power_state(),
        Err(Error::Hardware(PinError::ReadFailed(259)))
    );
}

#[test]
fn fresh_adapter_cache_is_empty() {
    let (light, tap) = light(true, true);
    assert_eq!(light.cache(), LightCache::default());
    assert!(tap.writes().is_empty());
}

// ── Brightness ────────────────────────────────────────────────

#[test]
fn brightness_scales_percent_to_duty() {
    let (mut light, tap) = light(true, false);
    light.set_brightness(40).unwrap();
    assert_eq!(tap.duty(), 102);
    assert_eq!(light.cache().brightness, Some(102));
    assert_eq!(light.get_brightness(), Ok(40));
}

#[test]
fn brightness_above_100_is_clamped() {
    let (mut light, tap) = light(true, false);
    light.set_brightness(180).unwrap();
    assert_eq!(tap.duty(), 255);
    assert_eq!(light.get_brightness(), Ok(100));
}

#[test]
fn brightness_disabled_is_a_config_error_without_pin_access() {
    let (mut light, tap) = light(false, true);
    light.set_power_state(true).unwrap();

    assert_eq!(light.set_brightness(50), Err(Error::NotEnabled("brightness")));
    assert_eq!(light.get_brightness(), Err(Error::NotEnabled("brightness")));
    // Only the power write reached the pin.
    assert_eq!(tap.writes(), vec![255]);
}

#[test]
fn brightness_read_prefers_live_duty_over_cache() {
    let (mut light, tap) = light(true, false);
    light.set_brightness(20).unwrap();
    tap.force_duty(255);
    assert_eq!(light.get_brightness(), Ok(100));
}

#[test]
fn brightness_read_falls_back_to_cache_then_zero() {
    let (mut light, tap) = light(true, false);
    tap.fail_reads(Some(PinError::ReadFailed(-1)));
    assert_eq!(light.get_brightness(), Ok(0));

    tap.fail_reads(None);
    light.set_brightness(60).unwrap();
    tap.fail_reads(Some(PinError::ReadFailed(-1)));
    assert_eq!(light.get_brightness(), Ok(60));
}

#[test]
fn failed_brightness_write_is_surfaced_and_not_cached() {
    let (mut light, tap) = light(true, false);
    light.set_brightness(30).unwrap();

    tap.fail_writes(Some(PinError::WriteFailed(5)));
    assert_eq!(
        light.set_brightness(90),
        Err(Error::Hardware(PinError::WriteFailed(5)))
    );
    assert_eq!(light.cache().brightness, Some(77));
}

#[test]
fn brightness_write_leaves_cached_power_alone() {
    let (mut light, _tap) = light(true, true);
    light.set_power_state(false).unwrap();
    light.set_brightness(70).unwrap();
    assert_eq!(light.cache().power, Some(false));
}

// ── Hub dispatch ──────────────────────────────────────────────

#[test]
fn dispatch_routes_to_operations() {
    let (mut light, tap) = light(true, true);
    light
        .write(CharacteristicType::On, Value::Bool(true))
        .unwrap();
    assert_eq!(light.read(CharacteristicType::On), Ok(Value::Bool(true)));

    light
        .write(CharacteristicType::Brightness, Value::Int(50))
        .unwrap();
    assert_eq!(tap.duty(), 128);
    assert_eq!(
        light.read(CharacteristicType::Brightness),
        Ok(Value::Int(50))
    );
}

#[test]
fn dispatch_rejects_levels_the_direct_setter_clamps() {
    let (mut light, tap) = light(true, true);
    light.set_brightness(40).unwrap();

    for level in [101, 255, -1] {
        assert_eq!(
            light.write(CharacteristicType::Brightness, Value::Int(level)),
            Err(Error::InvalidValue(CharacteristicType::Brightness))
        );
    }
    assert_eq!(tap.writes(), vec![102]);

    light.set_brightness(101).unwrap();
    assert_eq!(tap.duty(), 255);
}

#[test]
fn dispatch_accepts_numeric_on() {
    let (mut light, tap) = light(false, false);
    light.write(CharacteristicType::On, Value::Int(1)).unwrap();
    assert_eq!(tap.duty(), 255);
    light.write(CharacteristicType::On, Value::Int(0)).unwrap();
    assert_eq!(tap.duty(), 0);
}

#[test]
fn write_only_power_rejects_reads() {
    let (mut light, _tap) = light(false, false);
    assert_eq!(
        light.read(CharacteristicType::On),
        Err(Error::Unsupported {
            characteristic: CharacteristicType::On,
            access: Access::Read,
        })
    );
}

#[test]
fn unwired_brightness_rejected_by_dispatch() {
    let (mut light, tap) = light(false, true);
    assert_eq!(
        light.write(CharacteristicType::Brightness, Value::Int(50)),
        Err(Error::Unsupported {
            characteristic: CharacteristicType::Brightness,
            access: Access::Write,
        })
    );
    assert!(tap.writes().is_empty());
}

#[test]
fn wrong_value_type_rejected() {
    let (mut light, _tap) = light(true, true);
    assert_eq!(
        light.write(CharacteristicType::On, Value::String("on".into())),
        Err(Error::InvalidValue(CharacteristicType::On))
    );
}

#[test]
fn identify_succeeds() {
    let (mut light, tap) = light(false, false);
    assert_eq!(light.identify(), Ok(()));
    assert!(tap.writes().is_empty());
}
