//! Creational patterns: who decides which concrete value gets built, and how
//! many of them exist.

pub mod factory_method;
pub mod monostate;
pub mod prototype;
pub mod simple_factory;
pub mod singleton;
