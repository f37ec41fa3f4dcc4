//! Action application
//!
//! The sole boundary where strategy intent becomes engine/ledger state.
//! Fill attribution uses the action's own side, which is what keeps the
//! ledger's PnL honest.

use crate::actions::{ActionKind, ModificationAction};
use crate::context::EngineContext;
use types::fill::Fill;
use types::ids::OrderId;
use types::order::Order;

/// Applier switches: ledger updates and fill logging can be turned off for
/// dry runs.
#[derive(Debug, Clone, Copy)]
pub struct ApplyOptions {
    pub update_ledger: bool,
    pub log_fills: bool,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            update_ledger: true,
            log_fills: true,
        }
    }
}

/// Execution statistics for one batch of actions.
#[derive(Debug, Clone, Default)]
pub struct ApplyResult {
    /// Ids of orders actually submitted, in order.
    pub placed_ids: Vec<OrderId>,
    /// Cancels that removed a resting order.
    pub cancels_ok: u32,
    /// Cancels whose id was absent or already closed.
    pub cancels_failed: u32,
    /// Total fills produced by submitted orders.
    pub total_fills: usize,
    /// New actions skipped for missing side/price/quantity.
    pub malformed: u32,
}

/// Apply a strategy's actions, in order, against the engine and ledger.
///
/// Cancel failures are tallied, not escalated. A New action missing any of
/// side/price/quantity is skipped silently and tallied as malformed —
/// counted neither as a success nor a failure.
pub fn apply_modifications(
    actions: &[ModificationAction],
    ctx: &mut EngineContext<'_>,
    opts: ApplyOptions,
    fill_log: &mut Vec<Fill>,
) -> ApplyResult {
    let mut out = ApplyResult::default();

    for action in actions {
        match action.kind {
            ActionKind::Cancel => {
                if ctx.book.cancel(action.id) {
                    out.cancels_ok += 1;
                } else {
                    out.cancels_failed += 1;
                }
            }
            ActionKind::New => {
                let (side, price, quantity) = match (action.side, action.price, action.quantity) {
                    (Some(side), Some(price), Some(quantity)) => (side, price, quantity),
                    _ => {
                        out.malformed += 1;
                        continue;
                    }
                };

                let order = Order::new(action.id, side, price, quantity, ctx.tick);
                let submission = ctx.book.submit_limit(order);

                if opts.update_ledger {
                    for fill in &submission.fills {
                        ctx.ledger.on_trade(side, fill.price, fill.quantity);
                    }
                }
                if opts.log_fills {
                    fill_log.extend(submission.fills.iter().copied());
                }

                out.total_fills += submission.fills.len();
                out.placed_ids.push(submission.id);
            }
        }
    }

    out
}
