//! Quote modification actions
//!
//! A strategy expresses its desired quote changes as an ordered list of
//! actions. `New` carries side/price/quantity as optional fields on
//! purpose: an action missing any of them is a malformed-action signal the
//! applier skips and tallies rather than an unrepresentable state.

use serde::{Deserialize, Serialize};
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::Side;

/// What to do with a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// Place a new quote (requires side, price, quantity).
    New,
    /// Remove an existing quote (id only).
    Cancel,
}

/// One desired book operation.
///
/// List order is application order; a strategy replacing a quote must
/// itself emit Cancel before the matching New — the applier infers nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModificationAction {
    pub kind: ActionKind,
    /// For New: a pre-allocated id. For Cancel: the id to remove.
    pub id: OrderId,
    pub side: Option<Side>,
    pub price: Option<Price>,
    pub quantity: Option<Quantity>,
}

impl ModificationAction {
    /// A fully-specified New action.
    pub fn new_order(id: OrderId, side: Side, price: Price, quantity: Quantity) -> Self {
        Self {
            kind: ActionKind::New,
            id,
            side: Some(side),
            price: Some(price),
            quantity: Some(quantity),
        }
    }

    /// A Cancel action.
    pub fn cancel(id: OrderId) -> Self {
        Self {
            kind: ActionKind::Cancel,
            id,
            side: None,
            price: None,
            quantity: None,
        }
    }
}
