//! Crossing Rule
//!
//! The shared order-generation logic: compare the best resting level on
//! each side of the book against a fair value and take any level that is
//! strictly mispriced. Only the single best level per side is examined;
//! deeper levels are never swept.

use log::info;
use skimmer_core::{Order, OrderDepth, Price, Qty};

/// Per-instrument inputs to the crossing rule
#[derive(Debug, Clone, Copy)]
pub struct QuoteContext {
    /// The engine's current belief about the instrument's true price
    pub fair_value: Price,
    /// Remaining position capacity (limit minus current position), or
    /// `None` when no limit is configured. Exposed as the sizing extension
    /// point; the crossing rule does not yet consume it - sizing always
    /// takes the full resting level.
    pub capacity: Option<Qty>,
}

/// Emit crossing orders against the best level of each side
///
/// At most two orders per call, one per side, each fully taking the touched
/// level. Strict inequality: a level resting exactly at fair value is left
/// alone. Empty or zero-quantity levels emit nothing.
pub fn take_crossings(symbol: &str, depth: &OrderDepth, ctx: &QuoteContext) -> Vec<Order> {
    let mut orders = Vec::new();

    if let Some((ask_price, ask_qty)) = depth.best_ask()
        && ask_price < ctx.fair_value
        && ask_qty != 0
    {
        let size = ask_qty.abs();
        info!("[{symbol}] BUY {size}x @ {ask_price} (fair {})", ctx.fair_value);
        orders.push(Order::buy(symbol, ask_price, size));
    }

    if let Some((bid_price, bid_qty)) = depth.best_bid()
        && bid_price > ctx.fair_value
        && bid_qty != 0
    {
        info!("[{symbol}] SELL {bid_qty}x @ {bid_price} (fair {})", ctx.fair_value);
        orders.push(Order::sell(symbol, bid_price, bid_qty));
    }

    orders
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(fair_value: Price) -> QuoteContext {
        QuoteContext {
            fair_value,
            capacity: Some(20),
        }
    }

    #[test]
    fn test_buy_when_ask_below_fair() {
        let mut depth = OrderDepth::new();
        depth.sell_orders.insert(9996, -5);

        let orders = take_crossings("AMBER", &depth, &ctx(10000));
        assert_eq!(orders, vec![Order::buy("AMBER", 9996, 5)]);
    }

    #[test]
    fn test_sell_when_bid_above_fair() {
        let mut depth = OrderDepth::new();
        depth.buy_orders.insert(10003, 6);

        let orders = take_crossings("AMBER", &depth, &ctx(10000));
        assert_eq!(orders, vec![Order::sell("AMBER", 10003, 6)]);
    }

    #[test]
    fn test_both_sides_cross() {
        let mut depth = OrderDepth::new();
        depth.sell_orders.insert(9996, -5);
        depth.buy_orders.insert(10003, 6);

        let orders = take_crossings("AMBER", &depth, &ctx(10000));
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0], Order::buy("AMBER", 9996, 5));
        assert_eq!(orders[1], Order::sell("AMBER", 10003, 6));
    }

    #[test]
    fn test_no_orders_when_book_straddles_fair() {
        let mut depth = OrderDepth::new();
        depth.sell_orders.insert(10002, -5);
        depth.buy_orders.insert(9998, 6);

        assert!(take_crossings("AMBER", &depth, &ctx(10000)).is_empty());
    }

    #[test]
    fn test_strict_inequality_at_fair_value() {
        let mut depth = OrderDepth::new();
        depth.sell_orders.insert(10000, -5);
        depth.buy_orders.insert(10000, 6);

        assert!(take_crossings("AMBER", &depth, &ctx(10000)).is_empty());
    }

    #[test]
    fn test_only_best_level_taken() {
        let mut depth = OrderDepth::new();
        depth.sell_orders.insert(9996, -5);
        depth.sell_orders.insert(9997, -9); // also below fair, not best

        let orders = take_crossings("AMBER", &depth, &ctx(10000));
        assert_eq!(orders, vec![Order::buy("AMBER", 9996, 5)]);
    }

    #[test]
    fn test_empty_side_emits_nothing() {
        let mut depth = OrderDepth::new();
        depth.sell_orders.insert(9996, -5);

        let orders = take_crossings("AMBER", &depth, &ctx(10000));
        assert_eq!(orders.len(), 1);
        assert!(orders[0].is_buy());
    }

    #[test]
    fn test_zero_quantity_level_emits_nothing() {
        let mut depth = OrderDepth::new();
        depth.sell_orders.insert(9996, 0);
        depth.buy_orders.insert(10003, 0);

        assert!(take_crossings("AMBER", &depth, &ctx(10000)).is_empty());
    }
}
