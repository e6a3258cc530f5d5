//! Observation data
//!
//! Per-instrument plain values and conversion-market quotes delivered with
//! each snapshot. The engine carries these through untouched; they exist so
//! future rules can price conversions.

use crate::values::Symbol;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A conversion-market quote for one instrument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionQuote {
    pub bid_price: Decimal,
    pub ask_price: Decimal,
    pub transport_fees: Decimal,
    pub export_tariff: Decimal,
    pub import_tariff: Decimal,
    pub sunlight: Decimal,
    pub humidity: Decimal,
}

/// Observation block of a snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Observation {
    /// Plain scalar observations per instrument
    pub plain: HashMap<Symbol, i64>,
    /// Conversion-market quotes per instrument
    pub conversions: HashMap<Symbol, ConversionQuote>,
}
