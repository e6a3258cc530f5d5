//! Tick Snapshot
//!
//! The full exchange state delivered by the harness once per tick. The
//! snapshot is the engine's sole input: it is constructed externally and is
//! read-only to the quoting logic.

use crate::depth::OrderDepth;
use crate::observation::Observation;
use crate::trade::Trade;
use crate::values::{Qty, Symbol, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Listing metadata for one instrument
///
/// Carried in the snapshot; not consulted by the quoting logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub symbol: Symbol,
    pub product: String,
    pub denomination: String,
}

/// One tick's full market state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickSnapshot {
    /// Opaque state carried over from the previous tick's output.
    /// The engine returns it byte-identical; its internal structure is
    /// owned by whoever chooses to write into it.
    pub state_blob: String,
    pub timestamp: Timestamp,
    pub listings: HashMap<Symbol, Listing>,
    /// Resting orders per instrument; the instrument universe of a tick
    pub order_depths: HashMap<Symbol, OrderDepth>,
    /// Trades the engine itself participated in, per instrument
    pub own_trades: HashMap<Symbol, Vec<Trade>>,
    /// All other market trades, per instrument
    pub market_trades: HashMap<Symbol, Vec<Trade>>,
    /// Current signed position per instrument; absent = flat
    pub positions: HashMap<Symbol, Qty>,
    pub observations: Observation,
}

impl TickSnapshot {
    /// Current position for an instrument, treating absent as zero
    pub fn position(&self, symbol: &str) -> Qty {
        self.positions.get(symbol).copied().unwrap_or(0)
    }
}
