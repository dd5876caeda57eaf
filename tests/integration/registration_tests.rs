//! Integration tests: service descriptors for fresh registration and reattach.

use gpio_light::config::{LightConfig, ServiceKind};
use gpio_light::hap::{
    Accessory, CachedAccessory, CharacteristicType, Permissions, Service, ServiceType, Value,
};

use super::mock_hw::{BUILD_MILLIS, light, light_config, light_with};

fn lightbulb(services: &[Service]) -> &Service {
    services
        .iter()
        .find(|s| s.kind == ServiceType::Lightbulb)
        .expect("lightbulb service")
}

#[test]
fn light_with_brightness_and_write_only_power() {
    let (mut light, _tap) = light(true, false);
    let services = light.services();

    assert_eq!(services.len(), 2);
    assert_eq!(services[0].kind, ServiceType::AccessoryInformation);

    let bulb = lightbulb(&services);
    assert_eq!(bulb.name, "Desk Lamp");
    assert_eq!(bulb.characteristics.len(), 2);
    assert_eq!(
        bulb.characteristic(CharacteristicType::On).unwrap().perms,
        Permissions::WRITE
    );
    assert_eq!(
        bulb.characteristic(CharacteristicType::Brightness)
            .unwrap()
            .perms,
        Permissions::READ_WRITE
    );
}

#[test]
fn status_enables_power_readback() {
    let (mut light, _tap) = light(false, true);
    let services = light.services();
    let bulb = lightbulb(&services);
    assert_eq!(
        bulb.characteristic(CharacteristicType::On).unwrap().perms,
        Permissions::READ_WRITE
    );
    assert!(bulb.characteristic(CharacteristicType::Brightness).is_none());
}

#[test]
fn colors_flag_adds_nothing() {
    let mut config = light_config(true, true);
    config.colors = true;
    let (mut light, _tap) = light_with(config);
    let services = light.services();
    assert_eq!(lightbulb(&services).characteristics.len(), 2);
}

#[test]
fn unknown_service_exposes_identity_only() {
    for (brightness, status, colors) in [(false, false, false), (true, true, true)] {
        let mut config = light_config(brightness, status);
        config.colors = colors;
        config.service = ServiceKind::Unknown;
        let (mut light, _tap) = light_with(config);

        let services = light.services();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].kind, ServiceType::AccessoryInformation);
    }
}

#[test]
fn identity_carries_metadata_and_build_time_serial() {
    let mut config = LightConfig::light("Hall");
    config.manufacturer = "Acme".into();
    config.model = "PWM-1".into();
    let (mut light, _tap) = light_with(config);

    let services = light.services();
    let info = &services[0];
    let value = |kind| info.characteristic(kind).and_then(|c| c.value.clone());

    assert_eq!(
        value(CharacteristicType::Manufacturer),
        Some(Value::String("Acme".into()))
    );
    assert_eq!(
        value(CharacteristicType::Model),
        Some(Value::String("PWM-1".into()))
    );
    assert_eq!(
        value(CharacteristicType::SerialNumber),
        Some(Value::String(BUILD_MILLIS.to_string()))
    );
    assert!(info.characteristics.iter().all(|c| c.perms == Permissions::READ));
}

#[test]
fn reattach_wires_like_fresh_registration() {
    for (brightness, status) in [(false, false), (true, false), (false, true), (true, true)] {
        let (mut light, _tap) = light(brightness, status);
        let fresh = light.services();

        // Cached from an older config: every characteristic, wrong perms.
        let mut stale = Service::new(ServiceType::Lightbulb, "Desk Lamp");
        stale.wire(CharacteristicType::On, Permissions::READ);
        stale.wire(CharacteristicType::Brightness, Permissions::READ);
        let mut cached = CachedAccessory::new("Desk Lamp", vec![fresh[0].clone(), stale]);

        light.configure(&mut cached);

        assert!(cached.reachable);
        assert_eq!(
            cached.service(ServiceType::Lightbulb),
            Some(lightbulb(&fresh)),
            "brightness={brightness} status={status}"
        );
    }
}

#[test]
fn reattach_twice_is_idempotent() {
    let (mut light, _tap) = light(true, true);
    let mut cached = CachedAccessory::new("Desk Lamp", light.services());
    light.configure(&mut cached);
    let once = cached.clone();
    light.configure(&mut cached);
    assert_eq!(cached, once);
    assert_eq!(light.restored_accessories(), ["Desk Lamp", "Desk Lamp"]);
}

#[test]
fn reattach_without_lightbulb_only_marks_reachable() {
    let (mut light, _tap) = light(true, true);
    let info = light.services().remove(0);
    let mut cached = CachedAccessory::new("Old Switch", vec![info.clone()]);

    light.configure(&mut cached);

    assert!(cached.reachable);
    assert_eq!(cached.services, vec![info]);
    assert_eq!(light.restored_accessories(), ["Old Switch"]);
}

#[test]
fn descriptors_serialise_for_the_hub() {
    let (mut light, _tap) = light(true, false);
    let json = serde_json::to_value(light.services()).unwrap();
    let bulb = &json[1];
    assert_eq!(bulb["kind"], "Lightbulb");
    assert_eq!(bulb["characteristics"][0]["kind"], "On");
    assert_eq!(bulb["characteristics"][0]["perms"]["read"], false);
    assert!(bulb["characteristics"][0].get("value").is_none());
}
