//! Pattern 4: Simple Factory
//! One function turns a tag into a vehicle; callers never name the types.
//!
//! Run with: cargo run --bin p4_simple_factory

use anyhow::{Context, Result};
use design_patterns::config::DemoConfig;
use design_patterns::creational::simple_factory::{create_vehicle, VehicleKind};
use design_patterns::{console, logging};
use rand::seq::SliceRandom;

fn main() -> Result<()> {
    logging::init();
    let config = DemoConfig::load().context("loading demo config")?;
    let mut rng = config.rng();

    console::section("Random Rides");
    for _ in 0..config.rides {
        let tag = VehicleKind::TAGS
            .choose(&mut rng)
            .context("no vehicle tags")?;
        let vehicle = create_vehicle(tag)?;
        println!("  {}", vehicle.pick_up_customer());
    }

    console::section("Unknown Tag");
    if let Err(err) = create_vehicle("helicopter") {
        println!("  {err}");
    }

    console::key_points(&[
        "Clients depend on the Vehicle trait, not on concrete types",
        "Adding a vehicle means touching the factory, which bends open/closed",
    ]);
    Ok(())
}
