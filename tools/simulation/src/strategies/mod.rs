//! Quoting strategies
//!
//! A strategy is a one-operation capability: given the tick's context it
//! returns the ordered list of quote modifications it wants applied. Each
//! concrete strategy owns its private rolling state (live order ids,
//! volatility estimator); the engine never sees it.

use crate::actions::ModificationAction;
use crate::context::EngineContext;

pub mod avellaneda_stoikov;
pub mod inventory_skew;

pub use avellaneda_stoikov::{AvellanedaStoikov, AvellanedaStoikovParams};
pub use inventory_skew::{InventorySkew, QuoteParams};

/// Polymorphic quoting capability.
pub trait Strategy {
    /// Strategy name for logging.
    fn name(&self) -> &str;

    /// Compute desired quote changes for this tick.
    ///
    /// Returns actions in application order. An empty list means the
    /// existing quotes stand.
    fn step(&mut self, ctx: &mut EngineContext<'_>) -> Vec<ModificationAction>;
}
