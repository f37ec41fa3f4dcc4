//! Engine context
//!
//! The bundle of references a strategy and the action applier operate on
//! for one tick. State is always passed explicitly; there is no global
//! book or ledger.

use matching_engine::MatchingEngine;
use types::ids::OrderIdGen;
use types::ledger::PositionLedger;

/// Per-tick view of the simulation state.
pub struct EngineContext<'a> {
    /// The order book.
    pub book: &'a mut MatchingEngine,
    /// The ledger owned by the quoting strategy.
    pub ledger: &'a mut PositionLedger,
    /// Monotonic order-id generator; ids are never reused.
    pub ids: &'a mut OrderIdGen,
    /// Current simulation tick.
    pub tick: u64,
}

impl<'a> EngineContext<'a> {
    /// Assemble a context for one tick.
    pub fn new(
        book: &'a mut MatchingEngine,
        ledger: &'a mut PositionLedger,
        ids: &'a mut OrderIdGen,
        tick: u64,
    ) -> Self {
        Self {
            book,
            ledger,
            ids,
            tick,
        }
    }
}
