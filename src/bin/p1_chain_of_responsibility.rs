//! Pattern 1: Chain of Responsibility
//! Each handler resolves the letter or passes it on; the last one always answers.
//!
//! Run with: cargo run --bin p1_chain_of_responsibility

use design_patterns::behavioral::chain::{default_chain, handle_abc};
use design_patterns::{console, logging};

const LETTERS: [char; 9] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];

fn main() {
    logging::init();

    console::section("Function Chain");
    console::lines(LETTERS.iter().map(|&letter| handle_abc(letter)));

    console::section("Handler Chain");
    let chain = default_chain();
    println!("  chain: {chain}");
    console::lines(
        LETTERS
            .iter()
            .map(|letter| chain.handle(letter.to_ascii_uppercase())),
    );

    console::key_points(&[
        "The sender only knows the head of the chain",
        "Each handler decides: resolve, or delegate to its successor",
        "The fallback handler guarantees every request gets an answer",
    ]);
}
