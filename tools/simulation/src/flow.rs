//! Exogenous taker flow
//!
//! Deterministic seeded generator of market orders that cross the book each
//! tick, standing in for the rest of the market. Fills are applied to the
//! ledger from the aggressor's side and appended to the fill log.

use crate::context::EngineContext;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use types::fill::Fill;
use types::numeric::Quantity;
use types::order::{MarketOrder, Side};

/// Configuration for the taker flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowConfig {
    /// Minimum market-order size (inclusive).
    pub min_quantity: u64,
    /// Maximum market-order size (inclusive).
    pub max_quantity: u64,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            min_quantity: 1,
            max_quantity: 3,
        }
    }
}

/// Seeded random taker.
pub struct TakerFlow {
    config: FlowConfig,
    rng: ChaCha8Rng,
}

impl TakerFlow {
    /// Create a taker flow with a deterministic seed.
    pub fn new(config: FlowConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Submit one random market order and settle its fills.
    ///
    /// Returns the fills produced (possibly empty on a drained book).
    pub fn tick(&mut self, ctx: &mut EngineContext<'_>, fill_log: &mut Vec<Fill>) -> Vec<Fill> {
        let side = if self.rng.gen_bool(0.5) {
            Side::Buy
        } else {
            Side::Sell
        };
        let quantity = self
            .rng
            .gen_range(self.config.min_quantity..=self.config.max_quantity);

        let order = MarketOrder::new(
            ctx.ids.next(),
            side,
            Quantity::from_u64(quantity),
            ctx.tick,
        );
        let fills = ctx.book.add_market(order);

        for fill in &fills {
            ctx.ledger.on_trade(side, fill.price, fill.quantity);
        }
        fill_log.extend(fills.iter().copied());

        fills
    }
}
