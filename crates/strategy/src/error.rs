//! Error types for the strategy crate

use skimmer_core::Symbol;
use thiserror::Error;

/// Decision-layer errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    #[error("order book for {0} is one-sided; mid price undefined")]
    OneSidedBook(Symbol),

    #[error("linear model needs at least one coefficient")]
    EmptyModel,
}

pub type StrategyResult<T> = std::result::Result<T, StrategyError>;
