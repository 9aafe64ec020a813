//! # Design Patterns in Rust
//!
//! A catalogue of classic object-oriented patterns and a tour of the type
//! system, each exercised by its own binary under `src/bin/`.
//!
//! ## Behavioral
//! - Chain of responsibility (`behavioral::chain`)
//! - Strategy (`behavioral::strategy`)
//! - Template method with optional hooks (`behavioral::template_method`)
//!
//! ## Creational
//! - Factory method and simple factory (`creational::factory_method`,
//!   `creational::simple_factory`)
//! - Prototype via deep clone (`creational::prototype`)
//! - Singleton and monostate as explicit shared handles
//!   (`creational::singleton`, `creational::monostate`)
//!
//! ## Principles
//! - SOLID, one trait per responsibility (`solid`)
//!
//! ## Type system
//! - Aliases, newtypes, records, traits as protocols, generics, overloads,
//!   narrowing, iterators and streams, fluent APIs (`typing`)
//!
//! Run a demo with: `cargo run --bin <name>`

pub mod behavioral;
pub mod config;
pub mod console;
pub mod creational;
pub mod error;
pub mod logging;
pub mod solid;
pub mod typing;

pub use error::{PatternError, Result};
