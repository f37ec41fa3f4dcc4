//! Run metrics
//!
//! Aggregated execution statistics for one simulation run.

use crate::apply::ApplyResult;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::fill::Fill;

/// Counters accumulated over a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimMetrics {
    pub ticks_run: u64,
    /// Limit orders the applier placed on behalf of the strategy.
    pub orders_placed: u64,
    pub cancels_ok: u64,
    pub cancels_failed: u64,
    pub malformed_actions: u64,
    /// Fills produced by the strategy's own submissions.
    pub strategy_fills: u64,
    /// Fills produced by exogenous taker flow.
    pub flow_fills: u64,
    /// Total traded value across all fills.
    pub total_volume: Decimal,
}

impl SimMetrics {
    /// Create zeroed metrics.
    pub fn new() -> Self {
        Self {
            ticks_run: 0,
            orders_placed: 0,
            cancels_ok: 0,
            cancels_failed: 0,
            malformed_actions: 0,
            strategy_fills: 0,
            flow_fills: 0,
            total_volume: Decimal::ZERO,
        }
    }

    /// Fold one applier result into the counters.
    pub fn record_apply(&mut self, result: &ApplyResult) {
        self.orders_placed += result.placed_ids.len() as u64;
        self.cancels_ok += u64::from(result.cancels_ok);
        self.cancels_failed += u64::from(result.cancels_failed);
        self.malformed_actions += u64::from(result.malformed);
        self.strategy_fills += result.total_fills as u64;
    }

    /// Fold one tick of exogenous fills into the counters.
    pub fn record_flow(&mut self, fills: &[Fill]) {
        self.flow_fills += fills.len() as u64;
    }

    /// Add traded value for a batch of fills.
    pub fn record_volume(&mut self, fills: &[Fill]) {
        for fill in fills {
            self.total_volume += fill.notional();
        }
    }

    /// Build a one-line summary.
    pub fn summary(&self) -> String {
        format!(
            "Ticks: {} | Orders: {} | Cancels: {} ok / {} failed | Fills: {} strategy / {} flow | Volume: {}",
            self.ticks_run,
            self.orders_placed,
            self.cancels_ok,
            self.cancels_failed,
            self.strategy_fills,
            self.flow_fills,
            self.total_volume,
        )
    }
}

impl Default for SimMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::OrderId;
    use types::numeric::{Price, Quantity};
    use types::order::Side;

    #[test]
    fn test_record_apply() {
        let mut metrics = SimMetrics::new();
        let result = ApplyResult {
            placed_ids: vec![OrderId::new(1), OrderId::new(2)],
            cancels_ok: 1,
            cancels_failed: 2,
            total_fills: 3,
            malformed: 1,
        };
        metrics.record_apply(&result);

        assert_eq!(metrics.orders_placed, 2);
        assert_eq!(metrics.cancels_ok, 1);
        assert_eq!(metrics.cancels_failed, 2);
        assert_eq!(metrics.strategy_fills, 3);
        assert_eq!(metrics.malformed_actions, 1);
    }

    #[test]
    fn test_record_volume() {
        let mut metrics = SimMetrics::new();
        let fills = vec![Fill {
            price: Price::from_u64(100),
            quantity: Quantity::from_u64(3),
            tick: 1,
            resting_order_id: OrderId::new(7),
            aggressor_side: Side::Buy,
        }];
        metrics.record_volume(&fills);
        metrics.record_flow(&fills);

        assert_eq!(metrics.total_volume, Decimal::from(300));
        assert_eq!(metrics.flow_fills, 1);
    }

    #[test]
    fn test_summary_contains_counts() {
        let metrics = SimMetrics::new();
        assert!(metrics.summary().contains("Ticks: 0"));
    }
}
