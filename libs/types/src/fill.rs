//! Fill (settlement event) type
//!
//! A fill records one quantity of a resting order matched against an
//! incoming order at the resting order's price.

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use crate::order::Side;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One settlement event produced by the matching engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    /// Execution price (the resting order's price).
    pub price: Price,
    /// Matched quantity.
    pub quantity: Quantity,
    /// Simulation tick at which the match happened.
    pub tick: u64,
    /// Id of the resting order that was hit.
    pub resting_order_id: OrderId,
    /// Side of the incoming (aggressing) order.
    pub aggressor_side: Side,
}

impl Fill {
    /// Traded value (price × quantity).
    pub fn notional(&self) -> Decimal {
        self.price.as_decimal() * self.quantity.as_decimal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notional() {
        let fill = Fill {
            price: Price::from_u64(101),
            quantity: Quantity::from_u64(3),
            tick: 12,
            resting_order_id: OrderId::new(9),
            aggressor_side: Side::Buy,
        };
        assert_eq!(fill.notional(), Decimal::from(303));
    }

    #[test]
    fn test_fill_serialization() {
        let fill = Fill {
            price: Price::from_u64(101),
            quantity: Quantity::from_u64(3),
            tick: 12,
            resting_order_id: OrderId::new(9),
            aggressor_side: Side::Sell,
        };
        let json = serde_json::to_string(&fill).unwrap();
        let deserialized: Fill = serde_json::from_str(&json).unwrap();
        assert_eq!(fill, deserialized);
    }
}
