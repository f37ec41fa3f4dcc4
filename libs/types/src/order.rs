//! Order types
//!
//! A limit order may rest on the book; a market order never rests — any
//! unmatched remainder is discarded by the engine.

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Get the opposite side.
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

/// A limit order as submitted.
///
/// Immutable once created; the remaining quantity of a resting order is
/// tracked inside the book and only ever decreases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
    /// Simulation tick at which the order was submitted.
    pub submitted_tick: u64,
}

impl Order {
    /// Create a new limit order.
    pub fn new(id: OrderId, side: Side, price: Price, quantity: Quantity, submitted_tick: u64) -> Self {
        Self {
            id,
            side,
            price,
            quantity,
            submitted_tick,
        }
    }
}

/// A market order: no price, matched immediately at whatever the opposite
/// side offers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketOrder {
    pub id: OrderId,
    pub side: Side,
    pub quantity: Quantity,
    pub submitted_tick: u64,
}

impl MarketOrder {
    /// Create a new market order.
    pub fn new(id: OrderId, side: Side, quantity: Quantity, submitted_tick: u64) -> Self {
        Self {
            id,
            side,
            quantity,
            submitted_tick,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.opposite(), Side::Buy);
    }

    #[test]
    fn test_side_serialization() {
        assert_eq!(serde_json::to_string(&Side::Buy).unwrap(), "\"BUY\"");
        assert_eq!(serde_json::to_string(&Side::Sell).unwrap(), "\"SELL\"");
    }

    #[test]
    fn test_order_creation() {
        let order = Order::new(
            OrderId::new(7),
            Side::Buy,
            Price::from_u64(100),
            Quantity::from_u64(5),
            3,
        );
        assert_eq!(order.id, OrderId::new(7));
        assert_eq!(order.submitted_tick, 3);
    }
}
