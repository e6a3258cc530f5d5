//! Orders emitted by the engine

use crate::values::{Price, Qty, Symbol};
use serde::{Deserialize, Serialize};

/// An order to submit to the exchange
///
/// Positive quantity = buy that many; negative quantity = sell that many
/// (magnitude). Immutable once created; quantity is never zero for any
/// order the engine emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub symbol: Symbol,
    pub price: Price,
    pub quantity: Qty,
}

impl Order {
    /// Create a buy order for `size` units (size > 0)
    pub fn buy(symbol: impl Into<Symbol>, price: Price, size: Qty) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            quantity: size,
        }
    }

    /// Create a sell order for `size` units (size > 0; stored negative)
    pub fn sell(symbol: impl Into<Symbol>, price: Price, size: Qty) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            quantity: -size,
        }
    }

    pub fn is_buy(&self) -> bool {
        self.quantity > 0
    }

    pub fn is_sell(&self) -> bool {
        self.quantity < 0
    }

    /// Unsigned order size
    pub fn size(&self) -> Qty {
        self.quantity.abs()
    }
}
