//! Linear Fair-Value Forecaster
//!
//! Maintains a bounded window of recent mid-prices and projects the next
//! fair value with a fixed linear model: `intercept + Σ window[i] * coef[i]`
//! with the window ordered oldest to newest. The forecast is only defined
//! once the window is full; callers must handle the warm-up phase.

use crate::error::StrategyError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use skimmer_core::Price;
use std::collections::VecDeque;

/// How the mid-price window grows from empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowFill {
    /// Append every observation, evicting the oldest once full. The window
    /// fills during warm-up and stays at capacity thereafter.
    Eager,
    /// Append only when the window is already at capacity (checked after
    /// eviction). A window that starts empty never grows under this mode;
    /// it exists to reproduce that exact legacy behavior, which is a
    /// configuration decision point rather than a recommended default.
    Gated,
}

/// Sliding-window linear forecaster for one instrument's fair value
///
/// Owned by exactly one engine instance; the window is cross-tick state and
/// must not be shared between independent runs.
#[derive(Debug, Clone)]
pub struct LinearForecaster {
    window: VecDeque<Decimal>,
    coefficients: Vec<Decimal>,
    intercept: Decimal,
    fill: WindowFill,
}

impl LinearForecaster {
    /// Create a forecaster with an empty window
    ///
    /// Window capacity equals `coefficients.len()`; an empty coefficient
    /// vector is rejected because the model would be a bare constant with a
    /// permanently "ready" zero-length window.
    pub fn new(
        coefficients: Vec<Decimal>,
        intercept: Decimal,
        fill: WindowFill,
    ) -> Result<Self, StrategyError> {
        if coefficients.is_empty() {
            return Err(StrategyError::EmptyModel);
        }
        Ok(Self {
            window: VecDeque::with_capacity(coefficients.len()),
            coefficients,
            intercept,
            fill,
        })
    }

    /// Window capacity W
    pub fn capacity(&self) -> usize {
        self.coefficients.len()
    }

    /// Whether the window holds W samples and `forecast` is defined
    pub fn is_ready(&self) -> bool {
        self.window.len() == self.capacity()
    }

    /// Record this tick's mid-price
    pub fn observe(&mut self, mid: Decimal) {
        if self.window.len() == self.capacity() {
            self.window.pop_front();
        }
        match self.fill {
            WindowFill::Eager => self.window.push_back(mid),
            WindowFill::Gated => {
                // Legacy gating: only append when still at capacity after
                // the eviction check, which can never hold.
                if self.window.len() == self.capacity() {
                    self.window.push_back(mid);
                }
            }
        }
    }

    /// Current fair-value estimate, rounded to the nearest integer price
    /// (half to even), or `None` during warm-up
    pub fn forecast(&self) -> Option<Price> {
        if !self.is_ready() {
            return None;
        }
        let mut next = self.intercept;
        for (mid, coef) in self.window.iter().zip(&self.coefficients) {
            next += *mid * *coef;
        }
        next.round().to_i64()
    }

    /// Empty the window, returning the forecaster to warm-up
    pub fn reset(&mut self) {
        self.window.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn reference_model(fill: WindowFill) -> LinearForecaster {
        LinearForecaster::new(
            vec![dec!(0.34172), dec!(0.261144), dec!(0.207718), dec!(0.188951)],
            dec!(2.355276),
            fill,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_model_rejected() {
        let err = LinearForecaster::new(vec![], dec!(1), WindowFill::Eager);
        assert_eq!(err.unwrap_err(), StrategyError::EmptyModel);
    }

    #[test]
    fn test_eager_fill_reaches_ready() {
        let mut fc = reference_model(WindowFill::Eager);
        assert!(!fc.is_ready());
        assert_eq!(fc.forecast(), None);

        for mid in [dec!(5002), dec!(5003), dec!(5001)] {
            fc.observe(mid);
            assert!(!fc.is_ready());
            assert_eq!(fc.forecast(), None);
        }
        fc.observe(dec!(5000));
        assert!(fc.is_ready());
        assert!(fc.forecast().is_some());
    }

    #[test]
    fn test_reference_window_forecast() {
        let mut fc = reference_model(WindowFill::Eager);
        for mid in [dec!(5002), dec!(5003), dec!(5001), dec!(5000)] {
            fc.observe(mid);
        }
        // 2.355276 + 5002*0.34172 + 5003*0.261144 + 5001*0.207718
        //          + 5000*0.188951 = 5001.694866
        assert_eq!(fc.forecast(), Some(5002));
    }

    #[test]
    fn test_window_slides_once_full() {
        let mut fc = reference_model(WindowFill::Eager);
        for mid in [dec!(1), dec!(2), dec!(3), dec!(4), dec!(5)] {
            fc.observe(mid);
        }
        // Window is now [2, 3, 4, 5]
        let expected = dec!(2.355276)
            + dec!(2) * dec!(0.34172)
            + dec!(3) * dec!(0.261144)
            + dec!(4) * dec!(0.207718)
            + dec!(5) * dec!(0.188951);
        assert_eq!(fc.forecast(), expected.round().to_i64());
    }

    #[test]
    fn test_forecast_deterministic() {
        let mut a = reference_model(WindowFill::Eager);
        let mut b = reference_model(WindowFill::Eager);
        for mid in [dec!(5002), dec!(5003), dec!(5001), dec!(5000)] {
            a.observe(mid);
            b.observe(mid);
        }
        assert_eq!(a.forecast(), b.forecast());
    }

    #[test]
    fn test_gated_window_never_grows_from_empty() {
        let mut fc = reference_model(WindowFill::Gated);
        for tick in 0..100 {
            fc.observe(Decimal::from(5000 + tick));
            assert!(!fc.is_ready());
            assert_eq!(fc.forecast(), None);
        }
    }

    #[test]
    fn test_reset_returns_to_warm_up() {
        let mut fc = reference_model(WindowFill::Eager);
        for mid in [dec!(5002), dec!(5003), dec!(5001), dec!(5000)] {
            fc.observe(mid);
        }
        assert!(fc.is_ready());

        fc.reset();
        assert!(!fc.is_ready());
        assert_eq!(fc.forecast(), None);
    }
}
