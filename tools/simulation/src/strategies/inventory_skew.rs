//! Baseline inventory-skew quoter
//!
//! Quotes a fixed size around the book mid, shifting both sides down when
//! long and up when short so fills push the position back toward flat.
//! Quotes are only replaced when the target price or size actually changes.

use crate::actions::ModificationAction;
use crate::context::EngineContext;
use crate::strategies::Strategy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::Side;

/// Configuration for the baseline quoter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteParams {
    /// Full quoted spread (bid to ask) around the mid.
    pub spread: Decimal,
    /// Price shift per unit of inventory.
    pub skew_per_unit: Decimal,
    /// Fixed quote size per side.
    pub quantity: Quantity,
    /// Mid used when the book is completely empty.
    pub fallback_mid: Price,
}

impl Default for QuoteParams {
    fn default() -> Self {
        Self {
            spread: Decimal::from(2),
            skew_per_unit: Decimal::ONE,
            quantity: Quantity::from_u64(5),
            fallback_mid: Price::from_u64(100),
        }
    }
}

/// Baseline inventory-skew strategy.
pub struct InventorySkew {
    params: QuoteParams,

    bid_id: Option<OrderId>,
    ask_id: Option<OrderId>,
    bid_price: Option<Price>,
    ask_price: Option<Price>,
    last_quantity: Option<Quantity>,
}

impl InventorySkew {
    /// Create the strategy with the given parameters.
    pub fn new(params: QuoteParams) -> Self {
        Self {
            params,
            bid_id: None,
            ask_id: None,
            bid_price: None,
            ask_price: None,
            last_quantity: None,
        }
    }

    /// Reference mid: two-sided average, else whichever side exists, else
    /// the configured fallback.
    fn reference_mid(&self, ctx: &EngineContext<'_>) -> Decimal {
        match (ctx.book.best_bid(), ctx.book.best_ask()) {
            (Some(bid), Some(ask)) => (bid.as_decimal() + ask.as_decimal()) / Decimal::from(2),
            (Some(bid), None) => bid.as_decimal(),
            (None, Some(ask)) => ask.as_decimal(),
            (None, None) => self.params.fallback_mid.as_decimal(),
        }
    }
}

impl Strategy for InventorySkew {
    fn name(&self) -> &str {
        "inventory_skew"
    }

    fn step(&mut self, ctx: &mut EngineContext<'_>) -> Vec<ModificationAction> {
        let mut actions = Vec::new();

        let mid = self.reference_mid(ctx);
        let half = self.params.spread / Decimal::from(2);
        let skew = ctx.ledger.inventory * self.params.skew_per_unit;
        let target_quantity = self.params.quantity;

        // A target that skews below zero is unquotable; that side is left
        // untouched this tick.
        let bid_target = Price::try_new(mid - half - skew);
        let ask_target = Price::try_new(mid + half - skew);

        let bid_update = bid_target.is_some()
            && (self.bid_price != bid_target || self.last_quantity != Some(target_quantity));
        let ask_update = ask_target.is_some()
            && (self.ask_price != ask_target || self.last_quantity != Some(target_quantity));

        // Both cancels go first so a shifted quote can never cross the
        // stale quote it replaces.
        if bid_update {
            if let Some(old) = self.bid_id.take() {
                actions.push(ModificationAction::cancel(old));
                self.bid_price = None;
            }
        }
        if ask_update {
            if let Some(old) = self.ask_id.take() {
                actions.push(ModificationAction::cancel(old));
                self.ask_price = None;
            }
        }

        if bid_update {
            if let Some(target) = bid_target {
                let id = ctx.ids.next();
                actions.push(ModificationAction::new_order(id, Side::Buy, target, target_quantity));
                self.bid_id = Some(id);
                self.bid_price = Some(target);
            }
        }
        if ask_update {
            if let Some(target) = ask_target {
                let id = ctx.ids.next();
                actions.push(ModificationAction::new_order(id, Side::Sell, target, target_quantity));
                self.ask_id = Some(id);
                self.ask_price = Some(target);
            }
        }

        self.last_quantity = Some(target_quantity);
        actions
    }
}
