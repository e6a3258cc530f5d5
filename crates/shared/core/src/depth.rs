//! Order Book Depth
//!
//! One instrument's resting orders for a single tick, as delivered in the
//! snapshot. Uses BTreeMap for price levels so the best level is derived
//! from key order - the transport gives no guarantee that entries arrive
//! best-price-first, so "best" is always computed, never assumed.

use crate::values::{Price, Qty};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Resting orders for one instrument, one tick
///
/// Buy quantities are positive; sell quantities are negative (magnitude =
/// offered size). Each price appears at most once per side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderDepth {
    /// Bid levels: price -> quantity (positive)
    pub buy_orders: BTreeMap<Price, Qty>,
    /// Ask levels: price -> quantity (negative)
    pub sell_orders: BTreeMap<Price, Qty>,
}

impl OrderDepth {
    /// Create an empty depth
    pub fn new() -> Self {
        Self::default()
    }

    /// Get best bid: highest buy price and its quantity
    pub fn best_bid(&self) -> Option<(Price, Qty)> {
        self.buy_orders.iter().next_back().map(|(p, q)| (*p, *q))
    }

    /// Get best ask: lowest sell price and its quantity
    pub fn best_ask(&self) -> Option<(Price, Qty)> {
        self.sell_orders.iter().next().map(|(p, q)| (*p, *q))
    }

    /// Get mid price (average of best bid and ask)
    ///
    /// Returns `None` unless both sides have at least one level. Decimal
    /// because the mid of adjacent integer prices is fractional.
    pub fn mid_price(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid, _)), Some((ask, _))) => {
                Some(Decimal::from(bid + ask) / Decimal::TWO)
            }
            _ => None,
        }
    }

    /// Check if book is empty on both sides
    pub fn is_empty(&self) -> bool {
        self.buy_orders.is_empty() && self.sell_orders.is_empty()
    }

    /// Check if book has both sides (a mid price exists)
    pub fn is_two_sided(&self) -> bool {
        !self.buy_orders.is_empty() && !self.sell_orders.is_empty()
    }
}
