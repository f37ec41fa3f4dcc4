//! Simulation driver
//!
//! The replaceable outer loop: seeds initial liquidity, advances ticks,
//! invokes the strategy and applier, injects exogenous taker flow, and
//! samples per-tick reports.

use crate::apply::{apply_modifications, ApplyOptions};
use crate::context::EngineContext;
use crate::flow::{FlowConfig, TakerFlow};
use crate::metrics::SimMetrics;
use crate::reports::depth::{self, DepthSnapshot};
use crate::reports::fills::{self, FillRecord};
use crate::reports::pnl::LedgerRecord;
use crate::strategies::{
    AvellanedaStoikov, AvellanedaStoikovParams, InventorySkew, QuoteParams, Strategy,
};
use matching_engine::MatchingEngine;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::fill::Fill;
use types::ids::OrderIdGen;
use types::ledger::PositionLedger;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

/// Which quoting strategy drives the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyChoice {
    InventorySkew,
    AvellanedaStoikov,
}

/// Full run configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of ticks to simulate.
    pub steps: u32,
    /// Depth levels captured per snapshot.
    pub depth: usize,
    /// Seed for all randomness in the run.
    pub seed: u64,
    pub strategy: StrategyChoice,
    pub quote_params: QuoteParams,
    pub avellaneda_stoikov: AvellanedaStoikovParams,
    pub flow: FlowConfig,
    /// Size of the two seed orders placed around the fallback mid.
    pub seed_liquidity: Quantity,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            steps: 100,
            depth: 10,
            seed: 42,
            strategy: StrategyChoice::InventorySkew,
            quote_params: QuoteParams::default(),
            avellaneda_stoikov: AvellanedaStoikovParams::default(),
            flow: FlowConfig::default(),
            seed_liquidity: Quantity::from_u64(10),
        }
    }
}

/// Everything a run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub metrics: SimMetrics,
    pub fills: Vec<FillRecord>,
    pub pnl: Vec<LedgerRecord>,
    pub depth: Vec<DepthSnapshot>,
}

/// Reference mid for marking: two-sided average, else the surviving side,
/// else the configured fallback.
fn reference_mid(book: &MatchingEngine, fallback: Price) -> Price {
    match (book.best_bid(), book.best_ask()) {
        (Some(bid), Some(ask)) => {
            Price::new((bid.as_decimal() + ask.as_decimal()) / Decimal::from(2))
        }
        (Some(bid), None) => bid,
        (None, Some(ask)) => ask,
        (None, None) => fallback,
    }
}

/// Run the simulation to completion.
pub fn run(config: &SimConfig) -> RunSummary {
    let mut book = MatchingEngine::new();
    let mut ledger = PositionLedger::new();
    let mut ids = OrderIdGen::new();
    let mut flow = TakerFlow::new(config.flow.clone(), config.seed);

    let mut strategy: Box<dyn Strategy> = match config.strategy {
        StrategyChoice::InventorySkew => {
            Box::new(InventorySkew::new(config.quote_params.clone()))
        }
        StrategyChoice::AvellanedaStoikov => {
            Box::new(AvellanedaStoikov::new(config.avellaneda_stoikov.clone()))
        }
    };
    tracing::info!(strategy = strategy.name(), steps = config.steps, seed = config.seed, "run starting");

    let mut metrics = SimMetrics::new();
    let mut fill_log: Vec<Fill> = Vec::new();
    let mut pnl: Vec<LedgerRecord> = Vec::new();
    let mut depth_series: Vec<DepthSnapshot> = Vec::new();

    let fallback = config.quote_params.fallback_mid;
    let mut tick: u64 = 0;

    // Seed liquidity one price unit either side of the fallback mid so the
    // first tick sees a two-sided book.
    tick += 1;
    if let Some(seed_bid) = Price::try_new(fallback.as_decimal() - Decimal::ONE) {
        book.submit_limit(Order::new(ids.next(), Side::Buy, seed_bid, config.seed_liquidity, tick));
    }
    let seed_ask = Price::new(fallback.as_decimal() + Decimal::ONE);
    book.submit_limit(Order::new(ids.next(), Side::Sell, seed_ask, config.seed_liquidity, tick));

    for _ in 0..config.steps {
        tick += 1;
        let logged_before = fill_log.len();

        let mut ctx = EngineContext::new(&mut book, &mut ledger, &mut ids, tick);
        let actions = strategy.step(&mut ctx);
        let result = apply_modifications(&actions, &mut ctx, ApplyOptions::default(), &mut fill_log);
        let flow_fills = flow.tick(&mut ctx, &mut fill_log);

        metrics.record_apply(&result);
        metrics.record_flow(&flow_fills);
        metrics.record_volume(&fill_log[logged_before..]);
        metrics.ticks_run += 1;

        let reference = reference_mid(&book, fallback);
        pnl.push(LedgerRecord::sample(&ledger, reference, tick));
        depth_series.push(depth::snapshot(&book, config.depth, tick));

        tracing::debug!(
            tick,
            actions = actions.len(),
            cancels_ok = result.cancels_ok,
            strategy_fills = result.total_fills,
            flow_fills = flow_fills.len(),
            cash = %ledger.cash,
            inventory = %ledger.inventory,
            "tick complete"
        );
    }

    RunSummary {
        metrics,
        fills: fills::records(&fill_log),
        pnl,
        depth: depth_series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> SimConfig {
        SimConfig {
            steps: 50,
            ..Default::default()
        }
    }

    #[test]
    fn test_run_produces_per_tick_series() {
        let summary = run(&small_config());

        assert_eq!(summary.metrics.ticks_run, 50);
        assert_eq!(summary.pnl.len(), 50);
        assert_eq!(summary.depth.len(), 50);
        assert!(summary.metrics.orders_placed > 0);
    }

    #[test]
    fn test_run_is_deterministic() {
        let config = small_config();
        let first = run(&config);
        let second = run(&config);

        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = small_config();
        let mut b = small_config();
        a.seed = 1;
        b.seed = 2;

        // Different taker flow: at least one report should differ.
        assert_ne!(run(&a), run(&b));
    }

    #[test]
    fn test_avellaneda_stoikov_run() {
        let config = SimConfig {
            strategy: StrategyChoice::AvellanedaStoikov,
            steps: 50,
            ..Default::default()
        };
        let summary = run(&config);

        assert_eq!(summary.metrics.ticks_run, 50);
        // Always-replace quoting: cancels accumulate once quotes are live.
        assert!(summary.metrics.orders_placed > 0);
    }

    #[test]
    fn test_ledger_matches_signed_fill_sum() {
        let summary = run(&small_config());

        let mut signed = Decimal::ZERO;
        for fill in &summary.fills {
            match fill.side {
                Side::Buy => signed += fill.quantity.as_decimal(),
                Side::Sell => signed -= fill.quantity.as_decimal(),
            }
        }
        let last = summary.pnl.last().unwrap();
        assert_eq!(last.inventory, signed);
    }

    #[test]
    fn test_snapshots_never_crossed() {
        let summary = run(&small_config());
        for snap in &summary.depth {
            if let (Some(best_bid), Some(best_ask)) = (snap.bids.first(), snap.asks.first()) {
                assert!(best_bid.price < best_ask.price);
            }
        }
    }
}
