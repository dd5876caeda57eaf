fn main() {
    println!("cargo:rerun-if-env-changed=GPIO_LIGHT_CONFIG");

    // ESP-IDF link arguments are only needed for the device image.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
