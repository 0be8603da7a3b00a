//! Order entry: matching on arrival and resting of remainders.

use super::matching::MatchResult;
use super::order::{Order, OrderId, OrderKind, Side, TimeInForce};
use crate::OrderBook;
use tracing::trace;

impl OrderBook {
    /// Submit an order to the book.
    ///
    /// Unassigned ids are replaced with the next monotonic id before any other
    /// work. The order first runs through the matcher; a positive remainder
    /// rests at the tail of its level only for non-immediate limit orders.
    /// Market, IOC and FOK remainders are discarded silently, and a FOK order
    /// that cannot fill completely does not fill at all.
    pub fn add_order(&mut self, mut order: Order) -> MatchResult {
        if order.id.is_unassigned() {
            order.id = self.next_id();
        }
        let order_id = order.id;
        trace!(
            "order book {}: add {} {} {} qty {} px {} tif {}",
            self.symbol,
            order_id,
            order.kind,
            order.side,
            order.quantity,
            order.price,
            order.tif
        );

        let trades = self.match_incoming(&mut order);
        let remaining = order.quantity;

        if remaining > 0 && order.kind == OrderKind::Limit && !order.tif.is_immediate() {
            self.rest_order(order);
        } else if remaining > 0 {
            trace!(
                "order book {}: discarding residual {} of non-resting order {}",
                self.symbol,
                remaining,
                order_id
            );
        }

        MatchResult {
            order_id,
            trades,
            remaining_quantity: remaining,
            is_complete: remaining == 0,
        }
    }

    /// Submit a limit order with an empty timestamp.
    pub fn add_limit_order(
        &mut self,
        id: OrderId,
        price: u64,
        quantity: u64,
        side: Side,
        time_in_force: TimeInForce,
    ) -> MatchResult {
        self.add_order(Order::limit(id, "", side, price, quantity, time_in_force))
    }

    /// Submit a market order with an empty timestamp.
    pub fn submit_market_order(&mut self, id: OrderId, quantity: u64, side: Side) -> MatchResult {
        self.add_order(Order::market(id, "", side, quantity))
    }
}
