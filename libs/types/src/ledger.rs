//! Position ledger
//!
//! Tracks cash and signed inventory for one owning strategy/context.
//! Cash is realized PnL from completed trades; inventory × reference price
//! is the unrealized value of the open position.

use crate::numeric::{Price, Quantity};
use crate::order::Side;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cash and signed inventory (positive = long).
///
/// Mutated only by [`PositionLedger::on_trade`]; inventory always equals the
/// signed sum of all trade quantities applied to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionLedger {
    pub cash: Decimal,
    pub inventory: Decimal,
}

impl PositionLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            cash: Decimal::ZERO,
            inventory: Decimal::ZERO,
        }
    }

    /// Apply one trade from the owner's side.
    ///
    /// Buy: inventory grows, cash shrinks by the notional. Sell: the
    /// reverse.
    pub fn on_trade(&mut self, side: Side, price: Price, quantity: Quantity) {
        let notional = price.as_decimal() * quantity.as_decimal();
        match side {
            Side::Buy => {
                self.inventory += quantity.as_decimal();
                self.cash -= notional;
            }
            Side::Sell => {
                self.inventory -= quantity.as_decimal();
                self.cash += notional;
            }
        }
    }

    /// Value the ledger at a reference price: cash + inventory × price.
    pub fn mark_to_market(&self, reference: Price) -> Decimal {
        self.cash + self.inventory * reference.as_decimal()
    }

    /// Zero both cash and inventory.
    pub fn clear(&mut self) {
        self.cash = Decimal::ZERO;
        self.inventory = Decimal::ZERO;
    }
}

impl Default for PositionLedger {
    fn default() -> Self {
        Self::new()
    }
}
