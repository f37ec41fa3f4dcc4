//! Unique identifier types for simulator entities
//!
//! Order ids are plain monotonic counters: the driver owns a single
//! [`OrderIdGen`] and every participant (strategy, exogenous flow) draws
//! from it, so ids are process-unique and never reused.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an order.
///
/// Issued by [`OrderIdGen`]; the engine never mints ids itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Wrap a raw id value.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw id value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic order-id generator.
///
/// Ids increase strictly; a generator is expected to be the only id source
/// for the process that owns it.
#[derive(Debug, Clone)]
pub struct OrderIdGen {
    next: u64,
}

impl OrderIdGen {
    /// Create a generator starting at id 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Create a generator starting at a given id.
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Issue the next id (monotonically increasing, never reused).
    pub fn next(&mut self) -> OrderId {
        let id = OrderId(self.next);
        self.next += 1;
        id
    }
}

impl Default for OrderIdGen {
    fn default() -> Self {
        Self::new()
    }
}
