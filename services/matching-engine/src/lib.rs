//! Matching Engine
//!
//! Single-instrument order book implementing price-time priority matching
//! for the market-making simulator.
//!
//! **Key Invariants:**
//! - Price-time priority strictly enforced
//! - Deterministic matching (same inputs → same outputs)
//! - Conservation of quantity: fills never create or destroy size
//! - The book never persists a crossed state after an operation completes
//! - The id index always agrees with level membership

pub mod book;
pub mod engine;
pub mod matching;

pub use engine::{MatchingEngine, Submission};
