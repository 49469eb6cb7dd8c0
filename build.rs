fn main() {
    println!("cargo:rerun-if-changed=config/board.json");

    // Only the device build needs the ESP-IDF environment exported.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
