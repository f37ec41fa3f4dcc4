//! Property tests for the action applier
//!
//! Arbitrary action batches — including malformed News and cancels of
//! unknown ids — must never panic, and the tallies must account for every
//! action exactly once.

use matching_engine::MatchingEngine;
use proptest::prelude::*;
use simulation::actions::{ActionKind, ModificationAction};
use simulation::apply::{apply_modifications, ApplyOptions};
use simulation::context::EngineContext;
use types::ids::{OrderId, OrderIdGen};
use types::ledger::PositionLedger;
use types::numeric::{Price, Quantity};
use types::order::Side;

fn action_strategy() -> impl Strategy<Value = ModificationAction> {
    let new_action = (
        1u64..=500,
        any::<bool>(),
        proptest::option::weighted(0.9, 90u64..=110),
        proptest::option::weighted(0.9, 1u64..=10),
    )
        .prop_map(|(id, buy, price, qty)| ModificationAction {
            kind: ActionKind::New,
            id: OrderId::new(id),
            side: Some(if buy { Side::Buy } else { Side::Sell }),
            price: price.map(Price::from_u64),
            quantity: qty.map(Quantity::from_u64),
        });
    let cancel_action =
        (1u64..=500).prop_map(|id| ModificationAction::cancel(OrderId::new(id)));

    prop_oneof![3 => new_action, 1 => cancel_action]
}

proptest! {
    #[test]
    fn tallies_account_for_every_action(
        actions in prop::collection::vec(action_strategy(), 0..60)
    ) {
        // Order ids are a uniqueness contract: deduplicate the generated
        // New ids while leaving cancel targets untouched.
        let mut seen = std::collections::HashSet::new();
        let actions: Vec<ModificationAction> = actions
            .into_iter()
            .enumerate()
            .map(|(i, mut action)| {
                if action.kind == ActionKind::New && !seen.insert(action.id) {
                    action.id = OrderId::new(1_000 + i as u64);
                    seen.insert(action.id);
                }
                action
            })
            .collect();

        let mut book = MatchingEngine::new();
        let mut ledger = PositionLedger::new();
        let mut ids = OrderIdGen::starting_at(10_000);
        let mut fill_log = Vec::new();

        let mut ctx = EngineContext::new(&mut book, &mut ledger, &mut ids, 1);
        let result = apply_modifications(&actions, &mut ctx, ApplyOptions::default(), &mut fill_log);

        let new_count = actions.iter().filter(|a| a.kind == ActionKind::New).count();
        let cancel_count = actions.iter().filter(|a| a.kind == ActionKind::Cancel).count();

        // Every New either placed an order or was malformed; every Cancel
        // either succeeded or failed. Nothing is double-counted.
        prop_assert_eq!(
            result.placed_ids.len() + result.malformed as usize,
            new_count
        );
        prop_assert_eq!(
            (result.cancels_ok + result.cancels_failed) as usize,
            cancel_count
        );
        prop_assert_eq!(result.total_fills, fill_log.len());
    }
}
