//! Market-Making Simulation
//!
//! Single-instrument simulation harness for the matching core: pluggable
//! quoting strategies, the action-application pipeline that turns strategy
//! intent into book and ledger state, deterministic exogenous taker flow,
//! and per-tick structured reports.
//!
//! # Modules
//! - `context` — Per-tick bundle of book, ledger, id generator, tick
//! - `actions` — Quote modification actions (New / Cancel)
//! - `strategies` — Strategy trait, inventory-skew baseline, Avellaneda–Stoikov
//! - `apply` — Action applier and execution statistics
//! - `flow` — Seeded exogenous taker flow
//! - `driver` — Tick loop, run configuration, run summary
//! - `metrics` — Run counters
//! - `reports` — Fill, ledger, and depth records
//! - `export` — JSON export of a finished run

pub mod actions;
pub mod apply;
pub mod context;
pub mod driver;
pub mod export;
pub mod flow;
pub mod metrics;
pub mod reports;
pub mod strategies;

/// Crate version constant
pub const VERSION: &str = "1.0.0";
