//! Cancel and modify of resting orders.

use super::matching::MatchResult;
use super::order::{Order, OrderId, Side};
use crate::OrderBook;
use tracing::trace;

impl OrderBook {
    /// Cancel a resting order by id.
    ///
    /// Returns the removed order, or `None` if the id is not resting, in
    /// which case nothing changes. The index entry and the FIFO slot are
    /// removed together, and the level is erased if it empties.
    pub fn cancel_order(&mut self, order_id: OrderId) -> Option<Order> {
        let key = self.index.remove(&order_id)?;
        let (side, price) = {
            let node = self.arena.get(key)?;
            (node.order.side, node.order.price)
        };
        let levels = match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        let level = levels.get_mut(&price)?;
        let order = level.remove(&mut self.arena, key)?;
        if level.is_empty() {
            levels.remove(&price);
        }
        self.refresh_top();
        trace!(
            "order book {}: canceled {} ({} {} x {})",
            self.symbol,
            order_id,
            side,
            price,
            order.quantity
        );
        Some(order)
    }

    /// Re-price and re-size a resting order, keeping its id.
    ///
    /// A modify is a cancel-and-reinsert, not an in-place edit: the order is
    /// removed, given the new price and quantity, re-run through the matcher
    /// as an aggressor on its original side, and any remainder re-enters the
    /// tail of the FIFO at the new price. Time priority is lost even when the
    /// price is unchanged. The original time in force is carried through.
    ///
    /// A zero `new_quantity` is equivalent to a cancel. Returns `None` if the
    /// id is not resting.
    pub fn modify_order(
        &mut self,
        order_id: OrderId,
        new_price: u64,
        new_quantity: u64,
    ) -> Option<MatchResult> {
        if new_quantity == 0 {
            let order = self.cancel_order(order_id)?;
            return Some(MatchResult::new(order.id, 0));
        }

        let mut order = self.cancel_order(order_id)?;
        trace!(
            "order book {}: modify {} to px {} qty {}",
            self.symbol,
            order_id,
            new_price,
            new_quantity
        );
        order.price = new_price;
        order.quantity = new_quantity;

        let trades = self.match_incoming(&mut order);
        let remaining = order.quantity;
        if remaining > 0 {
            self.rest_order(order);
        }

        Some(MatchResult {
            order_id,
            trades,
            remaining_quantity: remaining,
            is_complete: remaining == 0,
        })
    }
}
