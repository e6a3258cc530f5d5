//! Engine configuration
//!
//! The instrument universe is fixed configuration: each quoted symbol gets
//! one rule variant and a position limit. Symbols that appear in a snapshot
//! without a rule are carried through with empty order lists.

use rust_decimal::Decimal;
use skimmer_core::{Price, Qty, Symbol};
use skimmer_strategy::WindowFill;
use std::collections::HashMap;

/// Per-instrument quoting-rule selection
#[derive(Debug, Clone)]
pub enum RuleConfig {
    /// Quote against a constant fair value
    Fixed { fair_value: Price },
    /// Quote against a sliding-window linear forecast of the mid-price
    Forecast {
        /// One coefficient per window slot, oldest sample first
        coefficients: Vec<Decimal>,
        intercept: Decimal,
        /// How the window grows from empty; `Eager` unless reproducing the
        /// legacy gated behavior is required
        fill: WindowFill,
    },
}

/// Engine configuration: rules and limits per instrument
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub rules: HashMap<Symbol, RuleConfig>,
    pub position_limits: HashMap<Symbol, Qty>,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fixed-fair-value instrument
    pub fn with_fixed_rule(
        mut self,
        symbol: impl Into<Symbol>,
        fair_value: Price,
        position_limit: Qty,
    ) -> Self {
        let symbol = symbol.into();
        self.rules
            .insert(symbol.clone(), RuleConfig::Fixed { fair_value });
        self.position_limits.insert(symbol, position_limit);
        self
    }

    /// Add a forecast-driven instrument
    pub fn with_forecast_rule(
        mut self,
        symbol: impl Into<Symbol>,
        coefficients: Vec<Decimal>,
        intercept: Decimal,
        fill: WindowFill,
        position_limit: Qty,
    ) -> Self {
        let symbol = symbol.into();
        self.rules.insert(
            symbol.clone(),
            RuleConfig::Forecast {
                coefficients,
                intercept,
                fill,
            },
        );
        self.position_limits.insert(symbol, position_limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builder_populates_rules_and_limits() {
        let config = EngineConfig::new()
            .with_fixed_rule("AMBER", 10000, 20)
            .with_forecast_rule(
                "PAPAYA",
                vec![dec!(0.25); 4],
                dec!(0),
                WindowFill::Eager,
                20,
            );

        assert_eq!(config.rules.len(), 2);
        assert_eq!(config.position_limits["AMBER"], 20);
        assert!(matches!(
            config.rules["AMBER"],
            RuleConfig::Fixed { fair_value: 10000 }
        ));
    }
}
