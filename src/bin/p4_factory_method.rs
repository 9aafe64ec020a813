//! Pattern 4: Factory Method
//! Each zone decides which vehicles it can build for a requested tag.
//!
//! Run with: cargo run --bin p4_factory_method
//! Reproducible run: PATTERNS_CONFIG=patterns.toml (with `seed = 1`)

use anyhow::{Context, Result};
use design_patterns::config::DemoConfig;
use design_patterns::creational::factory_method::{
    NorthZoneFactory, SouthZoneFactory, VehicleFactory,
};
use design_patterns::{console, logging};
use rand::seq::SliceRandom;
use rand::Rng;

fn dispatch_rides<F: VehicleFactory, R: Rng>(rides: usize, rng: &mut R) -> Result<()> {
    for _ in 0..rides {
        let tag = F::AVAILABLE
            .choose(rng)
            .context("factory offers no vehicles")?;
        let ride = F::dispatch(tag).with_context(|| format!("dispatching '{tag}'"))?;
        println!("  {}", ride.pick_up_customer());
    }
    Ok(())
}

fn main() -> Result<()> {
    logging::init();
    let config = DemoConfig::load().context("loading demo config")?;
    let mut rng = config.rng();

    console::section("North Zone");
    dispatch_rides::<NorthZoneFactory, _>(config.rides, &mut rng)?;

    console::section("South Zone");
    dispatch_rides::<SouthZoneFactory, _>(config.rides, &mut rng)?;

    console::section("Unknown Vehicle");
    match SouthZoneFactory::dispatch("moto") {
        Ok(ride) => println!("  unexpected ride: {:?}", ride.vehicle()),
        Err(err) => println!("  South zone refused: {err}"),
    }

    Ok(())
}
