//! Avellaneda–Stoikov optimal market making
//!
//! Quotes around a reservation price that shifts against inventory, with a
//! half-spread derived from risk aversion, liquidity sensitivity, and
//! realized volatility over a rolling window of log-returns. Unlike the
//! baseline quoter there is no retention heuristic: live quotes are
//! replaced every tick the model can price.

use crate::actions::ModificationAction;
use crate::context::EngineContext;
use crate::strategies::Strategy;
use matching_engine::MatchingEngine;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::Side;

/// Model parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvellanedaStoikovParams {
    /// Risk aversion γ (must be positive).
    pub gamma: f64,
    /// Liquidity sensitivity κ (must be positive).
    pub kappa: f64,
    /// Horizon H in ticks; clamped to at least 1.
    pub horizon_ticks: u32,
    /// Rolling log-return window length for realized volatility.
    pub vol_window: usize,
    /// Minimum price increment quotes are rounded to.
    pub tick_size: Decimal,
    /// Half-spread clamp, lower bound.
    pub min_half_spread: f64,
    /// Half-spread clamp, upper bound.
    pub max_half_spread: f64,
    /// Fixed quote size per side.
    pub quote_size: Quantity,
}

impl Default for AvellanedaStoikovParams {
    fn default() -> Self {
        Self {
            gamma: 0.10,
            kappa: 1.00,
            horizon_ticks: 5,
            vol_window: 60,
            tick_size: Decimal::new(1, 2), // 0.01
            min_half_spread: 0.00,
            max_half_spread: 1.00,
            quote_size: Quantity::from_u64(100),
        }
    }
}

/// Avellaneda–Stoikov strategy with incremental volatility estimation.
pub struct AvellanedaStoikov {
    params: AvellanedaStoikovParams,

    /// Rolling log-returns, capped at `vol_window`.
    returns: VecDeque<f64>,
    /// Running sum of returns (O(1) mean).
    sum: f64,
    /// Running sum of squared returns (O(1) variance).
    sum_sq: f64,
    last_mid: Option<f64>,

    live_bid: Option<OrderId>,
    live_ask: Option<OrderId>,
}

impl AvellanedaStoikov {
    /// Create the strategy with the given parameters.
    pub fn new(params: AvellanedaStoikovParams) -> Self {
        Self {
            params,
            returns: VecDeque::new(),
            sum: 0.0,
            sum_sq: 0.0,
            last_mid: None,
            live_bid: None,
            live_ask: None,
        }
    }

    /// Mid price, only when both sides are quoted.
    fn two_sided_mid(book: &MatchingEngine) -> Option<f64> {
        let bid = book.best_bid()?.as_decimal().to_f64()?;
        let ask = book.best_ask()?.as_decimal().to_f64()?;
        let mid = 0.5 * (bid + ask);
        if mid.is_finite() && mid > 0.0 {
            Some(mid)
        } else {
            None
        }
    }

    /// Feed a mid observation and return the current realized volatility.
    ///
    /// Eviction keeps the running sum/sum-of-squares consistent with the
    /// window contents; volatility is zero until two returns exist.
    fn update_sigma(&mut self, mid: f64) -> f64 {
        if let Some(last) = self.last_mid {
            let log_return = mid.ln() - last.ln();
            self.returns.push_back(log_return);
            self.sum += log_return;
            self.sum_sq += log_return * log_return;
            if self.returns.len() > self.params.vol_window {
                if let Some(evicted) = self.returns.pop_front() {
                    self.sum -= evicted;
                    self.sum_sq -= evicted * evicted;
                }
            }
        }
        self.last_mid = Some(mid);

        let n = self.returns.len();
        if n <= 1 {
            return 0.0;
        }
        let n = n as f64;
        let mean = self.sum / n;
        let variance = ((self.sum_sq / n) - mean * mean).max(0.0);
        variance.sqrt()
    }

    /// Round a raw quote to the tick grid: bids floor, asks ceil.
    fn round_to_tick(&self, value: f64, is_bid: bool) -> Option<Price> {
        if !value.is_finite() || value <= 0.0 {
            return None;
        }
        let raw = Decimal::from_f64(value)?;
        let tick = self.params.tick_size;
        if tick <= Decimal::ZERO {
            return Price::try_new(raw);
        }
        let ticks = raw / tick;
        let rounded = if is_bid { ticks.floor() } else { ticks.ceil() };
        Price::try_new(rounded * tick)
    }

    /// Reservation price and clamped half-spread, as tick-rounded quotes.
    ///
    /// r = mid − q·γ·varH shifts the indifference price so fills revert the
    /// position toward flat; δ = (1/γ)·ln(1+γ/κ) + γ·varH/2.
    fn quote_prices(&self, mid: f64, inventory: f64, sigma: f64) -> Option<(Price, Price)> {
        let horizon = self.params.horizon_ticks.max(1) as f64;
        let var_h = sigma * sigma * horizon;

        let reservation = mid - inventory * self.params.gamma * var_h;
        let core = (1.0 / self.params.gamma) * (1.0 + self.params.gamma / self.params.kappa).ln();
        let delta = (core + 0.5 * self.params.gamma * var_h)
            .clamp(self.params.min_half_spread, self.params.max_half_spread);

        let bid = self.round_to_tick(reservation - delta, true)?;
        let ask = self.round_to_tick(reservation + delta, false)?;
        Some((bid, ask))
    }
}

impl Strategy for AvellanedaStoikov {
    fn name(&self) -> &str {
        "avellaneda_stoikov"
    }

    fn step(&mut self, ctx: &mut EngineContext<'_>) -> Vec<ModificationAction> {
        let mut actions = Vec::new();

        // One-sided or empty book: unpriceable, keep existing quotes.
        let mid = match Self::two_sided_mid(ctx.book) {
            Some(mid) => mid,
            None => return actions,
        };

        // The volatility window advances on every priced tick, even when
        // the resulting quotes turn out invalid below.
        let sigma = self.update_sigma(mid);
        let inventory = ctx.ledger.inventory.to_f64().unwrap_or(0.0);

        let (bid, ask) = match self.quote_prices(mid, inventory, sigma) {
            Some(quotes) => quotes,
            None => return actions,
        };

        if let Some(old) = self.live_bid.take() {
            actions.push(ModificationAction::cancel(old));
        }
        if let Some(old) = self.live_ask.take() {
            actions.push(ModificationAction::cancel(old));
        }

        let bid_id = ctx.ids.next();
        let ask_id = ctx.ids.next();
        actions.push(ModificationAction::new_order(bid_id, Side::Buy, bid, self.params.quote_size));
        actions.push(ModificationAction::new_order(ask_id, Side::Sell, ask, self.params.quote_size));
        self.live_bid = Some(bid_id);
        self.live_ask = Some(ask_id);

        actions
    }
}
