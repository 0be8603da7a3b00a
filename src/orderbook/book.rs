//! Core OrderBook: the two-sided price ladder, the order index and the
//! cached top of book.

use super::arena::{OrderArena, OrderKey};
use super::cache::TopOfBook;
use super::level::PriceLevel;
use super::order::{Order, OrderId, Side, Trade};
use super::snapshot::{LevelDepth, OrderBookSnapshot};
use crate::utils::current_time_millis;
use std::collections::{BTreeMap, HashMap};
use tracing::trace;

/// A single-symbol limit order book with price-time priority.
///
/// Both sides are ordered maps keyed by tick price, ascending; the best bid is
/// the last bid key and the best ask the first ask key. Each level owns a FIFO
/// of resting orders threaded through a shared arena, and the order index maps
/// ids to arena handles for O(1) cancel and modify.
///
/// The book is strictly single-threaded: every operation takes `&mut self`,
/// completes synchronously, and leaves all invariants restored.
pub struct OrderBook {
    /// Label for this book, used in logs and snapshots.
    pub(super) symbol: String,

    /// Storage for every resting order; levels link through it.
    pub(super) arena: OrderArena,

    /// Bid levels, ascending by price. Best bid = last key.
    pub(super) bids: BTreeMap<u64, PriceLevel>,

    /// Ask levels, ascending by price. Best ask = first key.
    pub(super) asks: BTreeMap<u64, PriceLevel>,

    /// Order id -> FIFO slot handle. The node itself carries side and price.
    pub(super) index: HashMap<OrderId, OrderKey>,

    /// Cached top of book, refreshed after every structural change.
    pub(super) top: TopOfBook,

    /// Every trade emitted by this book, in execution order.
    pub(super) trades: Vec<Trade>,

    /// Next id handed out for orders submitted with the unassigned sentinel.
    pub(super) next_order_id: u64,
}

impl OrderBook {
    /// Create an empty book for the given symbol.
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            arena: OrderArena::default(),
            bids: BTreeMap::new(),
            asks: BTreeMap::new(),
            index: HashMap::new(),
            top: TopOfBook::default(),
            trades: Vec::new(),
            next_order_id: 1,
        }
    }

    /// The symbol of this order book.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Best bid price in ticks, if any.
    pub fn best_bid(&self) -> Option<u64> {
        self.top.bid_price
    }

    /// Best ask price in ticks, if any.
    pub fn best_ask(&self) -> Option<u64> {
        self.top.ask_price
    }

    /// The cached top of book.
    pub fn top_of_book(&self) -> TopOfBook {
        self.top
    }

    /// Best ask minus best bid, in ticks. `None` unless both sides rest.
    pub fn spread_ticks(&self) -> Option<u64> {
        self.top.spread_ticks()
    }

    /// Number of orders currently resting.
    pub fn resting_orders(&self) -> usize {
        self.index.len()
    }

    /// Look up a resting order by id.
    pub fn get_order(&self, order_id: OrderId) -> Option<&Order> {
        let key = *self.index.get(&order_id)?;
        self.arena.get(key).map(|node| &node.order)
    }

    /// The orders resting at one price, oldest first. Empty if no such level.
    pub fn orders_at(&self, side: Side, price: u64) -> Vec<&Order> {
        let levels = match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        };
        match levels.get(&price) {
            Some(level) => level.iter(&self.arena).collect(),
            None => Vec::new(),
        }
    }

    /// Every trade this book has emitted, in execution order.
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// Snapshot both sides down to `depth` levels, best first.
    pub fn create_snapshot(&self, depth: usize) -> OrderBookSnapshot {
        trace!("order book {}: snapshot depth {}", self.symbol, depth);
        let bids = self
            .bids
            .iter()
            .rev()
            .take(depth)
            .map(|(&price, level)| LevelDepth {
                price,
                quantity: level.total_quantity(),
                orders: level.order_count(),
            })
            .collect();
        let asks = self
            .asks
            .iter()
            .take(depth)
            .map(|(&price, level)| LevelDepth {
                price,
                quantity: level.total_quantity(),
                orders: level.order_count(),
            })
            .collect();

        OrderBookSnapshot {
            symbol: self.symbol.clone(),
            timestamp: current_time_millis(),
            bids,
            asks,
        }
    }
}

impl OrderBook {
    /// Verify every book invariant, panicking on the first violation.
    ///
    /// Walks both ladders, so this is for tests and debugging, not hot paths.
    pub fn assert_invariants(&self) {
        let mut indexed = 0usize;
        for (side, levels) in [(Side::Buy, &self.bids), (Side::Sell, &self.asks)] {
            for (&price, level) in levels {
                assert!(
                    !level.is_empty(),
                    "{side} level {price} exists but holds no orders"
                );
                let mut total = 0u64;
                let mut count = 0usize;
                for order in level.iter(&self.arena) {
                    assert!(order.quantity > 0, "order {} rests with zero residual", order.id);
                    assert_eq!(order.side, side, "order {} on the wrong side", order.id);
                    assert_eq!(order.price, price, "order {} at the wrong level", order.id);
                    let key = self
                        .index
                        .get(&order.id)
                        .copied()
                        .unwrap_or_else(|| panic!("resting order {} missing from index", order.id));
                    let via_index = &self.arena[key].order;
                    assert_eq!(via_index.id, order.id, "index handle resolves to another order");
                    total += order.quantity;
                    count += 1;
                }
                assert_eq!(
                    level.total_quantity(),
                    total,
                    "{side} level {price} cached total out of sync"
                );
                assert_eq!(
                    level.order_count(),
                    count,
                    "{side} level {price} cached count out of sync"
                );
                indexed += count;
            }
        }
        assert_eq!(self.index.len(), indexed, "index holds entries for departed orders");

        let expected = TopOfBook {
            bid_price: self.bids.last_key_value().map(|(&p, _)| p),
            bid_quantity: self
                .bids
                .last_key_value()
                .map_or(0, |(_, l)| l.total_quantity()),
            ask_price: self.asks.first_key_value().map(|(&p, _)| p),
            ask_quantity: self
                .asks
                .first_key_value()
                .map_or(0, |(_, l)| l.total_quantity()),
        };
        assert_eq!(self.top, expected, "top-of-book cache out of sync");

        if let (Some(bid), Some(ask)) = (self.top.bid_price, self.top.ask_price) {
            assert!(bid < ask, "book is crossed: bid {bid} >= ask {ask}");
        }
    }
}
