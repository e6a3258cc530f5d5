//! Skimmer Decision Layer
//!
//! Everything that actually decides: fair-value estimation and order
//! generation. The engine crate wires these pieces to the tick loop.
//!
//! - Linear fair-value forecaster over a sliding mid-price window
//! - Crossing rule that takes strictly mispriced best levels
//! - Fixed position-limit table with a capacity calculator
//!
//! ## Architecture
//!
//! ```text
//! TickSnapshot ──► mid price ──► LinearForecaster ──► fair value ─┐
//!                                                                 ▼
//!                        OrderDepth best bid/ask ──► take_crossings ──► Orders
//!                                                                 ▲
//!                   constant fair value (fixed-rule instruments) ─┘
//! ```

pub mod error;
pub mod forecast;
pub mod limits;
pub mod quoting;

// Re-export main types
pub use error::{StrategyError, StrategyResult};
pub use forecast::{LinearForecaster, WindowFill};
pub use limits::PositionLimits;
pub use quoting::{QuoteContext, take_crossings};
