//! Tick Loop
//!
//! One `Engine` instance per trading run. Each tick it walks the snapshot's
//! instrument set, dispatches to the configured rule, and aggregates the
//! emitted orders. Forecaster windows are the only cross-tick state and
//! live inside the instance; `&mut self` makes concurrent tick calls
//! unrepresentable.

use crate::config::{EngineConfig, RuleConfig};
use log::{debug, info};
use skimmer_core::{Order, Symbol, TickSnapshot};
use skimmer_strategy::{
    LinearForecaster, PositionLimits, QuoteContext, StrategyError, StrategyResult, take_crossings,
};
use std::collections::HashMap;

/// Conversion requests are protocol pass-through, fixed by this design
const CONVERSIONS: i64 = 1;

/// Materialized per-instrument rule
enum QuoteRule {
    FixedFair { fair_value: i64 },
    ForecastFair { forecaster: LinearForecaster },
}

/// Per-tick engine output, handed back to the harness
#[derive(Debug, Clone)]
pub struct TickOutput {
    /// Orders to submit, keyed by instrument; total over the snapshot's
    /// instrument set (unruled instruments map to empty lists)
    pub orders: HashMap<Symbol, Vec<Order>>,
    /// Conversion requests for the harness protocol
    pub conversions: i64,
    /// Opaque state to persist for the next tick, byte-identical to the
    /// snapshot's blob
    pub state_blob: String,
}

/// The market-making engine
pub struct Engine {
    rules: HashMap<Symbol, QuoteRule>,
    limits: PositionLimits,
}

impl Engine {
    /// Build an engine from configuration, forecaster windows empty
    pub fn new(config: EngineConfig) -> StrategyResult<Self> {
        let mut rules = HashMap::new();
        for (symbol, rule) in config.rules {
            let rule = match rule {
                RuleConfig::Fixed { fair_value } => QuoteRule::FixedFair { fair_value },
                RuleConfig::Forecast {
                    coefficients,
                    intercept,
                    fill,
                } => QuoteRule::ForecastFair {
                    forecaster: LinearForecaster::new(coefficients, intercept, fill)?,
                },
            };
            rules.insert(symbol, rule);
        }
        Ok(Self {
            rules,
            limits: PositionLimits::new(config.position_limits),
        })
    }

    /// Process one tick
    ///
    /// Rules are independent per instrument, so the map's iteration order
    /// never affects any instrument's orders. Fails only when a
    /// forecast-driven instrument's book is one-sided: the mid-price is
    /// undefined and the tick cannot be retried with stale data.
    pub fn on_tick(&mut self, snapshot: &TickSnapshot) -> StrategyResult<TickOutput> {
        debug!(
            "tick {}: {} instruments, state blob {} bytes",
            snapshot.timestamp,
            snapshot.order_depths.len(),
            snapshot.state_blob.len()
        );

        let mut orders = HashMap::new();
        for (symbol, depth) in &snapshot.order_depths {
            let capacity = self
                .limits
                .capacity(symbol, snapshot.positions.get(symbol).copied());

            let emitted = match self.rules.get_mut(symbol) {
                None => Vec::new(),
                Some(QuoteRule::FixedFair { fair_value }) => {
                    let ctx = QuoteContext {
                        fair_value: *fair_value,
                        capacity,
                    };
                    take_crossings(symbol, depth, &ctx)
                }
                Some(QuoteRule::ForecastFair { forecaster }) => {
                    let mid = depth
                        .mid_price()
                        .ok_or_else(|| StrategyError::OneSidedBook(symbol.clone()))?;
                    forecaster.observe(mid);
                    match forecaster.forecast() {
                        Some(fair_value) => {
                            debug!("[{symbol}] forecast fair value {fair_value} (mid {mid})");
                            let ctx = QuoteContext {
                                fair_value,
                                capacity,
                            };
                            take_crossings(symbol, depth, &ctx)
                        }
                        None => {
                            debug!("[{symbol}] forecaster warming up, not quoting");
                            Vec::new()
                        }
                    }
                }
            };
            orders.insert(symbol.clone(), emitted);
        }

        let total: usize = orders.values().map(Vec::len).sum();
        if total > 0 {
            info!("tick {}: emitting {total} orders", snapshot.timestamp);
        }

        Ok(TickOutput {
            orders,
            conversions: CONVERSIONS,
            state_blob: snapshot.state_blob.clone(),
        })
    }

    /// Clear all forecaster windows, returning the engine to a fresh-run
    /// state; rules and limits are untouched
    pub fn reset(&mut self) {
        for rule in self.rules.values_mut() {
            if let QuoteRule::ForecastFair { forecaster } = rule {
                forecaster.reset();
            }
        }
    }
}
