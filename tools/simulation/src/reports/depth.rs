//! Book-depth snapshots
//!
//! Top-N price levels per side with cumulative quantities, for external
//! visualization.

use matching_engine::MatchingEngine;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::numeric::{Price, Quantity};

/// A single depth level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthLevel {
    pub price: Price,
    pub quantity: Quantity,
    pub cumulative_quantity: Quantity,
}

/// Complete two-sided depth snapshot for one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthSnapshot {
    pub tick: u64,
    pub bids: Vec<DepthLevel>,
    pub asks: Vec<DepthLevel>,
    pub total_bid_depth: Quantity,
    pub total_ask_depth: Quantity,
    pub spread: Option<Decimal>,
}

fn levels(pairs: Vec<(Price, Quantity)>) -> Vec<DepthLevel> {
    let mut cumulative = Quantity::zero();
    pairs
        .into_iter()
        .map(|(price, quantity)| {
            cumulative = cumulative + quantity;
            DepthLevel {
                price,
                quantity,
                cumulative_quantity: cumulative,
            }
        })
        .collect()
}

/// Snapshot the top `depth` levels of each side.
pub fn snapshot(book: &MatchingEngine, depth: usize, tick: u64) -> DepthSnapshot {
    let spread = match (book.best_bid(), book.best_ask()) {
        (Some(bid), Some(ask)) => Some(ask.as_decimal() - bid.as_decimal()),
        _ => None,
    };

    DepthSnapshot {
        tick,
        bids: levels(book.top_bids(depth)),
        asks: levels(book.top_asks(depth)),
        total_bid_depth: book.bid_depth(),
        total_ask_depth: book.ask_depth(),
        spread,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::OrderIdGen;
    use types::order::{Order, Side};

    fn book() -> MatchingEngine {
        let mut ids = OrderIdGen::new();
        let mut book = MatchingEngine::new();
        book.submit_limit(Order::new(ids.next(), Side::Buy, Price::from_u64(99), Quantity::from_u64(2), 0));
        book.submit_limit(Order::new(ids.next(), Side::Buy, Price::from_u64(98), Quantity::from_u64(3), 0));
        book.submit_limit(Order::new(ids.next(), Side::Sell, Price::from_u64(101), Quantity::from_u64(1), 0));
        book
    }

    #[test]
    fn test_snapshot_shape() {
        let snap = snapshot(&book(), 10, 5);

        assert_eq!(snap.tick, 5);
        assert_eq!(snap.bids.len(), 2);
        assert_eq!(snap.asks.len(), 1);
        assert_eq!(snap.spread, Some(Decimal::from(2)));
        assert_eq!(snap.total_bid_depth, Quantity::from_u64(5));
        assert_eq!(snap.total_ask_depth, Quantity::from_u64(1));
    }

    #[test]
    fn test_cumulative_quantity() {
        let snap = snapshot(&book(), 10, 1);

        // Best bid first: qty 2 cum 2, then qty 3 cum 5.
        assert_eq!(snap.bids[0].quantity, Quantity::from_u64(2));
        assert_eq!(snap.bids[0].cumulative_quantity, Quantity::from_u64(2));
        assert_eq!(snap.bids[1].cumulative_quantity, Quantity::from_u64(5));
    }

    #[test]
    fn test_depth_truncation() {
        let snap = snapshot(&book(), 1, 1);
        assert_eq!(snap.bids.len(), 1);
        assert_eq!(snap.bids[0].price, Price::from_u64(99));
    }

    #[test]
    fn test_one_sided_spread_absent() {
        let mut ids = OrderIdGen::new();
        let mut book = MatchingEngine::new();
        book.submit_limit(Order::new(ids.next(), Side::Buy, Price::from_u64(99), Quantity::from_u64(2), 0));

        let snap = snapshot(&book, 10, 1);
        assert!(snap.spread.is_none());
        assert!(snap.asks.is_empty());
    }
}
