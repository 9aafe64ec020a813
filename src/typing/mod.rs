//! # A Tour of the Type System
//!
//! Each submodule shows one family of typing features with small functions
//! that the `p8_typing_tour` binary calls in order.
//!
//! - `aliases`: constants, type aliases, newtypes, literal-like enums
//! - `records`: typed records with required/optional fields, validated values
//! - `protocols`: traits as structural contracts, runtime checks with `Any`
//! - `generics`: generic functions and containers, bounds, higher-order wrappers
//! - `overloads`: one call, return type chosen by the caller
//! - `narrowing`: exhaustive matches, diverging functions, JSON narrowing
//! - `generators`: lazy iterators, a send/return coroutine, async streams,
//!   scope-bound resources
//! - `fluent`: chaining methods that return `&mut Self`

pub mod aliases;
pub mod fluent;
pub mod generators;
pub mod generics;
pub mod narrowing;
pub mod overloads;
pub mod protocols;
pub mod records;
