//! Pattern 2: Strategy
//! The same order, priced by four interchangeable discount strategies.
//!
//! Run with: cargo run --bin p2_strategy

use anyhow::{Context, Result};
use design_patterns::behavioral::strategy::{DiscountStrategy, Order};
use design_patterns::{console, logging};

fn main() -> Result<()> {
    logging::init();

    let strategies = [
        DiscountStrategy::TwentyPercent,
        DiscountStrategy::FiftyPercent,
        DiscountStrategy::NoDiscount,
        DiscountStrategy::custom(5.0).context("building the 5% discount")?,
    ];

    console::section("Orders of 1000");
    for strategy in strategies {
        let order = Order::new(1000.0, strategy);
        println!(
            "  {:<16} total={} with discount={}",
            strategy.to_string(),
            order.total(),
            order.total_with_discount()
        );
    }

    console::section("Invalid Custom Discount");
    match DiscountStrategy::custom(120.0) {
        Ok(strategy) => println!("  unexpectedly built {strategy}"),
        Err(err) => println!("  rejected: {err}"),
    }

    console::key_points(&[
        "Order never changes when a new discount is added",
        "The strategy is picked once, when the order is built",
    ]);
    Ok(())
}
