use super::arena::OrderKey;
use super::cache::TopOfBook;
use super::level::PriceLevel;
use super::order::{Order, OrderId, Side};
use crate::OrderBook;

impl OrderBook {
    /// Price of the best level the aggressor would match against.
    pub(super) fn best_opposing_price(&self, aggressor: Side) -> Option<u64> {
        match aggressor {
            Side::Buy => self.asks.first_key_value().map(|(&price, _)| price),
            Side::Sell => self.bids.last_key_value().map(|(&price, _)| price),
        }
    }

    /// Hand out the next monotonic id for an unassigned order.
    pub(super) fn next_id(&mut self) -> OrderId {
        let id = OrderId(self.next_order_id);
        self.next_order_id += 1;
        id
    }

    /// Queue an order at the tail of its level, creating the level lazily,
    /// and register it in the index. The top-of-book cache is refreshed.
    pub(super) fn rest_order(&mut self, order: Order) -> OrderKey {
        let (id, side, price) = (order.id, order.side, order.price);
        let levels = match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        let level = levels.entry(price).or_insert_with(PriceLevel::new);
        let key = level.push_back(&mut self.arena, order);
        self.index.insert(id, key);
        self.refresh_top();
        key
    }

    /// Recompute the cached top of book from the ladder extremes.
    pub(super) fn refresh_top(&mut self) {
        let bid = self
            .bids
            .last_key_value()
            .map(|(&price, level)| (price, level.total_quantity()));
        let ask = self
            .asks
            .first_key_value()
            .map(|(&price, level)| (price, level.total_quantity()));
        self.top = TopOfBook {
            bid_price: bid.map(|(price, _)| price),
            bid_quantity: bid.map_or(0, |(_, quantity)| quantity),
            ask_price: ask.map(|(price, _)| price),
            ask_quantity: ask.map_or(0, |(_, quantity)| quantity),
        };
    }
}

#[cfg(test)]
mod test_orderbook_private {
    use crate::orderbook::order::{Order, OrderId, Side, TimeInForce};
    use crate::OrderBook;

    fn resting(id: u64, side: Side, price: u64, quantity: u64) -> Order {
        Order::limit(OrderId(id), "t", side, price, quantity, TimeInForce::Gtc)
    }

    #[test]
    fn test_best_opposing_price_empty_book() {
        let book = OrderBook::new("TEST");
        assert_eq!(book.best_opposing_price(Side::Buy), None);
        assert_eq!(book.best_opposing_price(Side::Sell), None);
    }

    #[test]
    fn test_best_opposing_price_points_at_extremum() {
        let mut book = OrderBook::new("TEST");
        book.rest_order(resting(1, Side::Sell, 1010, 5));
        book.rest_order(resting(2, Side::Sell, 1005, 5));
        book.rest_order(resting(3, Side::Buy, 990, 5));
        book.rest_order(resting(4, Side::Buy, 995, 5));

        // A buyer matches the lowest ask, a seller the highest bid.
        assert_eq!(book.best_opposing_price(Side::Buy), Some(1005));
        assert_eq!(book.best_opposing_price(Side::Sell), Some(995));
    }

    #[test]
    fn test_next_id_is_monotonic_from_one() {
        let mut book = OrderBook::new("TEST");
        assert_eq!(book.next_id(), OrderId(1));
        assert_eq!(book.next_id(), OrderId(2));
        assert_eq!(book.next_id(), OrderId(3));
    }

    #[test]
    fn test_rest_order_registers_index_and_top() {
        let mut book = OrderBook::new("TEST");
        book.rest_order(resting(7, Side::Buy, 1000, 4));

        assert_eq!(book.best_bid(), Some(1000));
        assert_eq!(book.top_of_book().bid_quantity, 4);
        assert!(book.get_order(OrderId(7)).is_some());
        book.assert_invariants();
    }
}
