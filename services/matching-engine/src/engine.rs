//! Matching engine core
//!
//! Owns both book sides and the id index, and executes limit/market
//! matching with price-time priority.

use std::collections::HashMap;
use types::fill::Fill;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{MarketOrder, Order, Side};

use crate::book::{AskBook, BidBook};
use crate::matching::crossing;

/// Result of submitting a limit order: the order id and the ordered fill
/// list produced while matching.
#[derive(Debug, Clone)]
pub struct Submission {
    pub id: OrderId,
    pub fills: Vec<Fill>,
}

/// Single-instrument matching engine.
///
/// All resting orders live here; the id→(side, price) index is kept
/// consistent with level membership so cancellation is O(log n).
///
/// There is no ownership or account concept: an order crossing another order
/// from the same participant matches like any other (self-matching is
/// permitted, not prevented).
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    bids: BidBook,
    asks: AskBook,
    /// Locates a resting order for cancellation.
    index: HashMap<OrderId, (Side, Price)>,
}

impl MatchingEngine {
    /// Create a new empty engine.
    pub fn new() -> Self {
        Self {
            bids: BidBook::new(),
            asks: AskBook::new(),
            index: HashMap::new(),
        }
    }

    /// Submit a limit order.
    ///
    /// Matches against the opposite side while the best resting price is at
    /// least as aggressive as the limit, oldest order first within each
    /// level. Each fill is sized min(remaining incoming, remaining resting)
    /// and executes at the resting order's price. Any leftover quantity
    /// rests in the appropriate level.
    pub fn submit_limit(&mut self, order: Order) -> Submission {
        let mut remaining = order.quantity;
        let mut fills = Vec::new();

        match order.side {
            Side::Buy => self.match_asks(
                Some(order.price),
                order.submitted_tick,
                &mut remaining,
                &mut fills,
            ),
            Side::Sell => self.match_bids(
                Some(order.price),
                order.submitted_tick,
                &mut remaining,
                &mut fills,
            ),
        }

        if !remaining.is_zero() {
            match order.side {
                Side::Buy => self.bids.insert(order.id, order.price, remaining, order.submitted_tick),
                Side::Sell => self.asks.insert(order.id, order.price, remaining, order.submitted_tick),
            }
            self.index.insert(order.id, (order.side, order.price));
        }

        Submission {
            id: order.id,
            fills,
        }
    }

    /// Submit a market order.
    ///
    /// Matches across as many opposite price levels as needed (no price
    /// limit), FIFO within each level. A market order never rests: any
    /// unmatched remainder on an exhausted opposite book is dropped.
    pub fn add_market(&mut self, order: MarketOrder) -> Vec<Fill> {
        let mut remaining = order.quantity;
        let mut fills = Vec::new();

        match order.side {
            Side::Buy => self.match_asks(None, order.submitted_tick, &mut remaining, &mut fills),
            Side::Sell => self.match_bids(None, order.submitted_tick, &mut remaining, &mut fills),
        }

        fills
    }

    /// Cancel a resting order by id.
    ///
    /// Returns whether the order was found; an absent or already-closed id
    /// is not an error.
    pub fn cancel(&mut self, id: OrderId) -> bool {
        let (side, price) = match self.index.remove(&id) {
            Some(entry) => entry,
            None => return false,
        };
        match side {
            Side::Buy => self.bids.remove(&id, price),
            Side::Sell => self.asks.remove(&id, price),
        }
    }

    /// Best resting bid price, if any.
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.best_price()
    }

    /// Best resting ask price, if any.
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.best_price()
    }

    /// Up to `depth` (price, aggregate quantity) bid levels, best-first.
    pub fn top_bids(&self, depth: usize) -> Vec<(Price, Quantity)> {
        self.bids.depth_snapshot(depth)
    }

    /// Up to `depth` (price, aggregate quantity) ask levels, best-first.
    pub fn top_asks(&self, depth: usize) -> Vec<(Price, Quantity)> {
        self.asks.depth_snapshot(depth)
    }

    /// Total resting bid quantity.
    pub fn bid_depth(&self) -> Quantity {
        self.bids.total_depth()
    }

    /// Total resting ask quantity.
    pub fn ask_depth(&self) -> Quantity {
        self.asks.total_depth()
    }

    /// Total number of resting orders.
    pub fn order_count(&self) -> usize {
        self.bids.order_count() + self.asks.order_count()
    }

    /// Match an incoming buy against the ask side.
    ///
    /// `limit` of None means a market order: every level is crossable.
    fn match_asks(
        &mut self,
        limit: Option<Price>,
        tick: u64,
        remaining: &mut Quantity,
        fills: &mut Vec<Fill>,
    ) {
        while !remaining.is_zero() {
            let (level_price, level) = match self.asks.best_level_mut() {
                Some(best) => best,
                None => break,
            };
            if let Some(limit_price) = limit {
                if !crossing::can_match(limit_price, level_price) {
                    break;
                }
            }

            while !remaining.is_zero() {
                let (maker_id, maker_remaining) = match level.peek_front() {
                    Some(front) => front,
                    None => break,
                };
                let fill_quantity = (*remaining).min(maker_remaining);

                fills.push(Fill {
                    price: level_price,
                    quantity: fill_quantity,
                    tick,
                    resting_order_id: maker_id,
                    aggressor_side: Side::Buy,
                });

                *remaining = remaining.saturating_sub(fill_quantity);
                let maker_left = maker_remaining.saturating_sub(fill_quantity);
                if maker_left.is_zero() {
                    self.index.remove(&maker_id);
                }
                level.update_front_quantity(maker_left);
            }

            if level.is_empty() {
                self.asks.remove_level(&level_price);
            }
        }
    }

    /// Match an incoming sell against the bid side.
    fn match_bids(
        &mut self,
        limit: Option<Price>,
        tick: u64,
        remaining: &mut Quantity,
        fills: &mut Vec<Fill>,
    ) {
        while !remaining.is_zero() {
            let (level_price, level) = match self.bids.best_level_mut() {
                Some(best) => best,
                None => break,
            };
            if let Some(limit_price) = limit {
                if !crossing::can_match(level_price, limit_price) {
                    break;
                }
            }

            while !remaining.is_zero() {
                let (maker_id, maker_remaining) = match level.peek_front() {
                    Some(front) => front,
                    None => break,
                };
                let fill_quantity = (*remaining).min(maker_remaining);

                fills.push(Fill {
                    price: level_price,
                    quantity: fill_quantity,
                    tick,
                    resting_order_id: maker_id,
                    aggressor_side: Side::Sell,
                });

                *remaining = remaining.saturating_sub(fill_quantity);
                let maker_left = maker_remaining.saturating_sub(fill_quantity);
                if maker_left.is_zero() {
                    self.index.remove(&maker_id);
                }
                level.update_front_quantity(maker_left);
            }

            if level.is_empty() {
                self.bids.remove_level(&level_price);
            }
        }
    }
}
