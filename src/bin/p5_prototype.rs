//! Pattern 5: Prototype
//! Build a new person by copying an existing one, then customise the copy.
//!
//! Run with: cargo run --bin p5_prototype

use design_patterns::creational::prototype::{Address, Person};
use design_patterns::{console, logging};

fn main() {
    logging::init();

    let mut joao = Person::new("João", "Justino");
    joao.add_address(Address::new("Rua X", "1444"));

    console::section("Prototype");
    println!("  {joao}");

    console::section("Customised Clone");
    let mut wife = joao.clone_prototype();
    wife.first_name = "Nobody".to_string();
    wife.addresses[0].number = "1500".to_string();
    println!("  clone:    {wife}");
    println!("  original: {joao}");

    console::key_points(&[
        "Clone copies every owned field, nested Vec included",
        "Changing the clone never reaches back into the original",
    ]);
}
