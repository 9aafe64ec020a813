//! Pattern 6: Singleton
//! One registry, created here and passed down, always returns the same settings.
//!
//! Run with: cargo run --bin p6_singleton

use design_patterns::creational::singleton::{SettingsHandle, SettingsRegistry};
use design_patterns::{console, logging};

fn greet(settings: &SettingsHandle) -> String {
    match settings.get("name") {
        Some(name) => format!("hello, {name}"),
        None => "nobody configured yet".to_string(),
    }
}

fn main() {
    logging::init();

    // Lives for the whole process; everything below borrows it.
    let registry = SettingsRegistry::new();

    console::section("Two Requests");
    let as1 = registry.instance();
    let as2 = registry.instance();
    println!("  as1: {as1}");
    println!("  as2: {as2}");
    println!("  as1 == as2: {}", as1 == as2);
    println!("  same identity: {}", as1.id() == as2.id());

    console::section("Shared Attributes");
    println!("  before: {}", greet(&as2));
    as1.set("name", "Joao");
    println!("  after setting through as1, as2 says: {}", greet(&as2));
}
