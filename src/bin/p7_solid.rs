//! Pattern 7: SOLID principles
//! A restaurant that depends only on small traits.
//!
//! Run with: cargo run --bin p7_solid

use design_patterns::solid::{
    serve_sauce, Barbecue, Fryer, Ketchup, Mayonnaise, Oven, Restaurant, RobotCook, Sauce, Waiter,
};
use design_patterns::{console, logging};

fn main() {
    logging::init();

    console::section("Open/Closed: swap parts, keep Restaurant");
    println!("  {}", Restaurant::new(Fryer, Waiter, Ketchup).order());
    println!("  {}", Restaurant::new(Oven, Waiter, Mayonnaise).order());

    console::section("Liskov: a new sauce slots in");
    println!("  {}", Restaurant::new(Fryer, Waiter, Barbecue).order());

    console::section("Interface Segregation: a robot that only cooks");
    println!("  {}", Restaurant::new(RobotCook, Waiter, Ketchup).order());

    console::section("Sauces chosen at runtime");
    let sauces: [&dyn Sauce; 3] = [&Ketchup, &Mayonnaise, &Barbecue];
    for sauce in sauces {
        println!("  {}", serve_sauce(sauce));
    }
}
