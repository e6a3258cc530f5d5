/// Price value - integer price ticks as delivered by the harness
/// Future: could become a newtype with validation (non-negative, tick size)
pub type Price = i64;

/// Quantity value - signed: positive = buy side, negative = sell side
pub type Qty = i64;

/// Tick timestamp as delivered by the harness
pub type Timestamp = i64;

/// Symbol identifier for a tradeable instrument
pub type Symbol = String;
