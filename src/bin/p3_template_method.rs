//! Pattern 3: Template Method
//! One fixed sequence of steps; variants fill in the steps and optional hooks.
//!
//! Run with: cargo run --bin p3_template_method

use design_patterns::behavioral::template_method::{
    a_moda_da_casa, concrete_one, concrete_two, vegan,
};
use design_patterns::{console, logging};

fn main() {
    logging::init();

    console::section("ConcreteOne (with hook)");
    console::lines(concrete_one().run());

    console::section("ConcreteTwo (no hook)");
    console::lines(concrete_two().run());

    for recipe in [a_moda_da_casa(), vegan()] {
        console::section(&format!("Pizza: {}", recipe.name));
        console::lines(recipe.prepare());
    }

    console::key_points(&[
        "The order of steps lives in one routine nobody overrides",
        "Mandatory steps have no default; hooks default to doing nothing",
        "Don't call us, we'll call you",
    ]);
}
