//! Per-tick ledger records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::ledger::PositionLedger;
use types::numeric::Price;

/// Ledger state sampled at the end of a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRecord {
    pub tick: u64,
    pub cash: Decimal,
    pub inventory: Decimal,
    pub mark_to_market: Decimal,
}

impl LedgerRecord {
    /// Sample the ledger at a reference price.
    pub fn sample(ledger: &PositionLedger, reference: Price, tick: u64) -> Self {
        Self {
            tick,
            cash: ledger.cash,
            inventory: ledger.inventory,
            mark_to_market: ledger.mark_to_market(reference),
        }
    }
}
