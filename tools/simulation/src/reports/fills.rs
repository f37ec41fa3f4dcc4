//! Fill records
//!
//! Flat per-fill rows for external consumption.

use serde::{Deserialize, Serialize};
use types::fill::Fill;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::Side;

/// One executed fill, as logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillRecord {
    pub tick: u64,
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
    pub resting_order_id: OrderId,
}

impl From<&Fill> for FillRecord {
    fn from(fill: &Fill) -> Self {
        Self {
            tick: fill.tick,
            side: fill.aggressor_side,
            price: fill.price,
            quantity: fill.quantity,
            resting_order_id: fill.resting_order_id,
        }
    }
}

/// Convert a raw fill log into records.
pub fn records(fills: &[Fill]) -> Vec<FillRecord> {
    fills.iter().map(FillRecord::from).collect()
}
