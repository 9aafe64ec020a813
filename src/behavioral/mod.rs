//! Behavioral patterns: who handles a request, which algorithm runs, and in
//! what order the steps of an algorithm execute.

pub mod chain;
pub mod strategy;
pub mod template_method;
