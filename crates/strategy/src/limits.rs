//! Position Limits
//!
//! Fixed per-instrument maximum absolute positions, set at engine
//! construction and never mutated.

use skimmer_core::{Qty, Symbol};
use std::collections::HashMap;

/// Fixed position-limit table
#[derive(Debug, Clone, Default)]
pub struct PositionLimits {
    limits: HashMap<Symbol, Qty>,
}

impl PositionLimits {
    pub fn new(limits: HashMap<Symbol, Qty>) -> Self {
        Self { limits }
    }

    /// Configured limit for an instrument
    pub fn limit(&self, symbol: &str) -> Option<Qty> {
        self.limits.get(symbol).copied()
    }

    /// Remaining capacity: limit minus current position
    ///
    /// An absent position is explicitly a flat book (zero), so capacity
    /// falls back to the full limit. `None` only when the instrument has
    /// no configured limit at all.
    pub fn capacity(&self, symbol: &str, current: Option<Qty>) -> Option<Qty> {
        self.limit(symbol).map(|limit| limit - current.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PositionLimits {
        PositionLimits::new(HashMap::from([
            ("AMBER".to_string(), 20),
            ("PAPAYA".to_string(), 20),
        ]))
    }

    #[test]
    fn test_capacity_subtracts_position() {
        assert_eq!(table().capacity("AMBER", Some(12)), Some(8));
        assert_eq!(table().capacity("AMBER", Some(-5)), Some(25));
    }

    #[test]
    fn test_missing_position_is_flat() {
        assert_eq!(table().capacity("PAPAYA", None), Some(20));
    }

    #[test]
    fn test_unconfigured_symbol_has_no_capacity() {
        assert_eq!(table().capacity("QUARTZ", Some(3)), None);
        assert_eq!(table().limit("QUARTZ"), None);
    }
}
