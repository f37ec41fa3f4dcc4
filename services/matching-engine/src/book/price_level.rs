//! Price level implementation with FIFO queue
//!
//! A price level contains all resting orders at a specific price point.
//! Orders are maintained in FIFO (First-In-First-Out) order to enforce
//! time priority.

use std::collections::VecDeque;
use types::ids::OrderId;
use types::numeric::Quantity;

/// A price level containing resting orders at a specific price.
///
/// Maintains strict FIFO ordering for time-priority matching and a running
/// aggregate of remaining quantity.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    /// Queue of resting orders at this price level (FIFO order)
    orders: VecDeque<LevelEntry>,
    /// Total remaining quantity at this level
    total_quantity: Quantity,
}

/// Entry in the price level queue
#[derive(Debug, Clone)]
struct LevelEntry {
    order_id: OrderId,
    remaining: Quantity,
    submitted_tick: u64,
}

impl PriceLevel {
    /// Create a new empty price level.
    pub fn new() -> Self {
        Self {
            orders: VecDeque::new(),
            total_quantity: Quantity::zero(),
        }
    }

    /// Insert an order at the back of the queue (time priority).
    pub fn insert(&mut self, order_id: OrderId, quantity: Quantity, submitted_tick: u64) {
        self.orders.push_back(LevelEntry {
            order_id,
            remaining: quantity,
            submitted_tick,
        });
        self.total_quantity = self.total_quantity + quantity;
    }

    /// Remove an order from the queue by id.
    ///
    /// Returns the remaining quantity of the removed order, or None if not
    /// found at this level.
    pub fn remove(&mut self, order_id: &OrderId) -> Option<Quantity> {
        let position = self.orders.iter().position(|entry| &entry.order_id == order_id)?;
        let entry = self.orders.remove(position)?;
        self.total_quantity = self.total_quantity.saturating_sub(entry.remaining);
        Some(entry.remaining)
    }

    /// Peek at the front order without removing it.
    ///
    /// Returns (order_id, remaining_quantity).
    pub fn peek_front(&self) -> Option<(OrderId, Quantity)> {
        self.orders.front().map(|entry| (entry.order_id, entry.remaining))
    }

    /// Submission tick of the front order, if any.
    pub fn front_tick(&self) -> Option<u64> {
        self.orders.front().map(|entry| entry.submitted_tick)
    }

    /// Update the remaining quantity of the front order after a fill.
    ///
    /// If the new quantity is zero, the order is removed from the queue.
    /// Returns false when the level is empty.
    pub fn update_front_quantity(&mut self, new_quantity: Quantity) -> bool {
        if let Some(entry) = self.orders.front_mut() {
            let old_quantity = entry.remaining;

            if new_quantity.is_zero() {
                self.orders.pop_front();
            } else {
                entry.remaining = new_quantity;
            }

            self.total_quantity =
                self.total_quantity.saturating_sub(old_quantity) + new_quantity;
            true
        } else {
            false
        }
    }

    /// Check if the price level is empty.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Get the total remaining quantity at this price level.
    pub fn total_quantity(&self) -> Quantity {
        self.total_quantity
    }

    /// Get the number of resting orders at this level.
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}

impl Default for PriceLevel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_level_insert() {
        let mut level = PriceLevel::new();
        level.insert(OrderId::new(1), Quantity::from_u64(5), 1);

        assert_eq!(level.order_count(), 1);
        assert_eq!(level.total_quantity(), Quantity::from_u64(5));
        assert!(!level.is_empty());
    }

    #[test]
    fn test_price_level_fifo_order() {
        let mut level = PriceLevel::new();
        level.insert(OrderId::new(1), Quantity::from_u64(1), 1);
        level.insert(OrderId::new(2), Quantity::from_u64(2), 2);
        level.insert(OrderId::new(3), Quantity::from_u64(3), 3);

        let (front_id, front_qty) = level.peek_front().unwrap();
        assert_eq!(front_id, OrderId::new(1));
        assert_eq!(front_qty, Quantity::from_u64(1));
        assert_eq!(level.front_tick(), Some(1));
    }

    #[test]
    fn test_price_level_remove() {
        let mut level = PriceLevel::new();
        level.insert(OrderId::new(1), Quantity::from_u64(1), 1);
        level.insert(OrderId::new(2), Quantity::from_u64(2), 2);

        let removed = level.remove(&OrderId::new(1));
        assert_eq!(removed, Some(Quantity::from_u64(1)));
        assert_eq!(level.order_count(), 1);
        assert_eq!(level.total_quantity(), Quantity::from_u64(2));

        assert_eq!(level.remove(&OrderId::new(99)), None);
    }

    #[test]
    fn test_price_level_update_front_quantity() {
        let mut level = PriceLevel::new();
        level.insert(OrderId::new(1), Quantity::from_u64(5), 1);

        // Partial fill
        level.update_front_quantity(Quantity::from_u64(3));
        assert_eq!(level.total_quantity(), Quantity::from_u64(3));
        assert_eq!(level.order_count(), 1);

        // Complete fill (zero quantity removes the order)
        level.update_front_quantity(Quantity::zero());
        assert!(level.is_empty());
        assert_eq!(level.total_quantity(), Quantity::zero());
    }

    #[test]
    fn test_price_level_total_quantity_invariant() {
        let mut level = PriceLevel::new();
        level.insert(OrderId::new(1), Quantity::from_u64(2), 1);
        level.insert(OrderId::new(2), Quantity::from_u64(3), 1);
        level.insert(OrderId::new(3), Quantity::from_u64(4), 2);

        assert_eq!(level.total_quantity(), Quantity::from_u64(9));
    }
}
