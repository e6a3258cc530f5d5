//! Skimmer Core Domain
//!
//! Pure domain types for the skimmer trading engine: the per-tick market
//! snapshot delivered by the harness and the orders returned to it.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod depth;
pub mod observation;
pub mod order;
pub mod snapshot;
pub mod trade;
pub mod values;

// Re-export commonly used types at crate root
pub use depth::OrderDepth;
pub use observation::{ConversionQuote, Observation};
pub use order::Order;
pub use snapshot::{Listing, TickSnapshot};
pub use trade::Trade;
pub use values::{Price, Qty, Symbol, Timestamp};
