//! Trade history records

use crate::values::{Price, Qty, Symbol, Timestamp};
use serde::{Deserialize, Serialize};

/// A historical trade, own or market-wide
///
/// Diagnostic history only; the quoting logic does not read trades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub symbol: Symbol,
    pub price: Price,
    pub quantity: Qty,
    /// Counterparty id of the buyer, if known
    pub buyer: Option<String>,
    /// Counterparty id of the seller, if known
    pub seller: Option<String>,
    pub timestamp: Timestamp,
}
