#[cfg(test)]
mod tests {
    use crate::orderbook::arena::OrderArena;
    use crate::orderbook::level::PriceLevel;
    use crate::orderbook::order::{Order, OrderId, Side, TimeInForce};

    fn order(id: u64, quantity: u64) -> Order {
        Order::limit(OrderId(id), "t", Side::Buy, 1000, quantity, TimeInForce::Gtc)
    }

    #[test]
    fn test_push_back_keeps_arrival_order() {
        let mut arena = OrderArena::default();
        let mut level = PriceLevel::new();
        level.push_back(&mut arena, order(1, 5));
        level.push_back(&mut arena, order(2, 3));
        level.push_back(&mut arena, order(3, 7));

        let ids: Vec<u64> = level.iter(&arena).map(|o| o.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(level.total_quantity(), 15);
        assert_eq!(level.order_count(), 3);
    }

    #[test]
    fn test_front_is_oldest() {
        let mut arena = OrderArena::default();
        let mut level = PriceLevel::new();
        let first = level.push_back(&mut arena, order(1, 5));
        level.push_back(&mut arena, order(2, 3));
        assert_eq!(level.front(), Some(first));
    }

    #[test]
    fn test_remove_front_advances_queue() {
        let mut arena = OrderArena::default();
        let mut level = PriceLevel::new();
        let first = level.push_back(&mut arena, order(1, 5));
        let second = level.push_back(&mut arena, order(2, 3));

        let removed = level.remove(&mut arena, first).unwrap();
        assert_eq!(removed.id, OrderId(1));
        assert_eq!(level.front(), Some(second));
        assert_eq!(level.total_quantity(), 3);
        assert_eq!(level.order_count(), 1);
    }

    #[test]
    fn test_remove_middle_keeps_neighbors_linked() {
        let mut arena = OrderArena::default();
        let mut level = PriceLevel::new();
        level.push_back(&mut arena, order(1, 5));
        let middle = level.push_back(&mut arena, order(2, 3));
        level.push_back(&mut arena, order(3, 7));

        level.remove(&mut arena, middle).unwrap();
        let ids: Vec<u64> = level.iter(&arena).map(|o| o.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(level.total_quantity(), 12);
    }

    #[test]
    fn test_handles_survive_unrelated_removals() {
        let mut arena = OrderArena::default();
        let mut level = PriceLevel::new();
        let first = level.push_back(&mut arena, order(1, 5));
        let second = level.push_back(&mut arena, order(2, 3));
        let third = level.push_back(&mut arena, order(3, 7));

        // Removing the middle slot must leave the other handles usable.
        level.remove(&mut arena, second).unwrap();
        assert_eq!(arena[first].order.id, OrderId(1));
        assert_eq!(arena[third].order.id, OrderId(3));
        assert!(
            level.remove(&mut arena, second).is_none(),
            "a removed handle is stale"
        );
    }

    #[test]
    fn test_remove_last_empties_level() {
        let mut arena = OrderArena::default();
        let mut level = PriceLevel::new();
        let only = level.push_back(&mut arena, order(1, 5));
        level.remove(&mut arena, only).unwrap();

        assert!(level.is_empty());
        assert_eq!(level.front(), None);
        assert_eq!(level.total_quantity(), 0);
        assert_eq!(level.iter(&arena).count(), 0);
    }

    #[test]
    fn test_reduce_tracks_partial_fills() {
        let mut arena = OrderArena::default();
        let mut level = PriceLevel::new();
        let key = level.push_back(&mut arena, order(1, 10));

        arena[key].order.quantity -= 4;
        level.reduce(4);
        assert_eq!(level.total_quantity(), 6);

        // Removing after the partial fill subtracts only the remainder.
        level.remove(&mut arena, key).unwrap();
        assert_eq!(level.total_quantity(), 0);
    }
}
