//! Matching logic
//!
//! Price-compatibility predicates used by the engine's matching loop.

pub mod crossing;
