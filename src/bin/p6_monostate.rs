//! Pattern 6: Monostate (Borg)
//! Many instances, one shared attribute store.
//!
//! Run with: cargo run --bin p6_monostate

use design_patterns::creational::monostate::{MonoState, SharedState};
use design_patterns::{console, logging};

fn main() {
    logging::init();

    let state = SharedState::new();

    console::section("Shared State");
    let m1 = MonoState::new(&state, Some("Leo"), None);
    m1.set("x", 20); // visible to every instance
    let m2 = MonoState::new(&state, None, Some("Fizza Now"));
    println!("  m1: {m1}");
    println!("  m2: {m2}");
    println!("  share one store: {}", m1.shares_state_with(&m2));

    console::key_points(&[
        "Singleton: one instance. Monostate: many instances, one state",
        "The store is created once and handed to every instance",
    ]);
}
