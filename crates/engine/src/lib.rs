//! Skimmer Engine
//!
//! Orchestration for the skimmer market maker: a synchronous, single-threaded
//! tick loop over harness snapshots. Each tick it dispatches every instrument
//! to its configured quoting rule and returns the aggregated orders together
//! with the protocol pass-through fields.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use skimmer_engine::{Engine, EngineConfig};
//! use skimmer_strategy::WindowFill;
//! use rust_decimal_macros::dec;
//!
//! let config = EngineConfig::new()
//!     .with_fixed_rule("AMBER", 10000, 20)
//!     .with_forecast_rule(
//!         "PAPAYA",
//!         vec![dec!(0.34172), dec!(0.261144), dec!(0.207718), dec!(0.188951)],
//!         dec!(2.355276),
//!         WindowFill::Eager,
//!         20,
//!     );
//! let mut engine = Engine::new(config)?;
//! let output = engine.on_tick(&snapshot)?;
//! ```

pub mod config;
pub mod engine;

// Re-export main types
pub use config::{EngineConfig, RuleConfig};
pub use engine::{Engine, TickOutput};
