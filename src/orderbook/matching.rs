//! The crossing algorithm: consumes opposing levels in price-time order.

use super::order::{Order, OrderId, OrderKind, Side, TimeInForce, Trade};
use crate::OrderBook;
use tracing::trace;

/// Outcome of running one aggressor through the matcher.
#[derive(Clone, Debug)]
pub struct MatchResult {
    /// Id of the aggressor (after any automatic assignment).
    pub order_id: OrderId,
    /// Trades produced by this event, in execution order.
    pub trades: Vec<Trade>,
    /// Quantity left unfilled. For a resting remainder this is the quantity
    /// now queued in the book; for IOC/FOK/market it was discarded.
    pub remaining_quantity: u64,
    /// True when the aggressor was filled completely.
    pub is_complete: bool,
}

impl MatchResult {
    pub(super) fn new(order_id: OrderId, remaining_quantity: u64) -> Self {
        Self {
            order_id,
            trades: Vec::new(),
            remaining_quantity,
            is_complete: remaining_quantity == 0,
        }
    }

    /// Quantity filled, summed over the trades of this event.
    pub fn executed_quantity(&self) -> u64 {
        self.trades.iter().map(|trade| trade.quantity).sum()
    }
}

impl OrderBook {
    /// Match `incoming` against the opposing side, mutating its residual.
    ///
    /// Emits one trade per maker consumed, priced at the maker's resting
    /// level. Filled makers leave the index and their FIFO; drained levels are
    /// erased and the top-of-book cache refreshed after each level. The trades
    /// are appended to the book's log and also returned for the caller.
    pub(super) fn match_incoming(&mut self, incoming: &mut Order) -> Vec<Trade> {
        if incoming.tif == TimeInForce::Fok {
            let limit = (incoming.kind == OrderKind::Limit).then_some(incoming.price);
            let available = self.peek_match(incoming.side, incoming.quantity, limit);
            if available < incoming.quantity {
                trace!(
                    "order book {}: FOK order {} wants {} but only {} available",
                    self.symbol,
                    incoming.id,
                    incoming.quantity,
                    available
                );
                return Vec::new();
            }
        }

        let mut trades = Vec::new();
        while incoming.quantity > 0 {
            let Some(best) = self.best_opposing_price(incoming.side) else {
                break;
            };
            if !incoming.crosses(best) {
                break;
            }
            self.consume_level(incoming, best, &mut trades);
            self.refresh_top();
        }

        self.trades.extend(trades.iter().cloned());
        trades
    }

    /// Consume makers at one opposing level, oldest first, until the level is
    /// drained or the aggressor is filled. Erases the level when it empties.
    fn consume_level(&mut self, incoming: &mut Order, price: u64, out: &mut Vec<Trade>) {
        let opposing = match incoming.side {
            Side::Buy => &mut self.asks,
            Side::Sell => &mut self.bids,
        };
        let Some(level) = opposing.get_mut(&price) else {
            return;
        };

        while incoming.quantity > 0 {
            let Some(head) = level.front() else {
                break;
            };
            let maker = &mut self.arena[head].order;
            let traded = incoming.quantity.min(maker.quantity);
            let (buy_id, sell_id) = match incoming.side {
                Side::Buy => (incoming.id, maker.id),
                Side::Sell => (maker.id, incoming.id),
            };
            out.push(Trade {
                timestamp: incoming.timestamp.clone(),
                price,
                quantity: traded,
                buy_id,
                sell_id,
            });

            incoming.quantity -= traded;
            maker.quantity -= traded;
            level.reduce(traded);
            if maker.quantity == 0 {
                let maker_id = maker.id;
                self.index.remove(&maker_id);
                level.remove(&mut self.arena, head);
            }
        }

        if level.is_empty() {
            opposing.remove(&price);
        }
    }

    /// Read-only walk of the opposing side from the best level inward,
    /// summing liquidity at prices no worse than `limit` (no limit for market
    /// orders). Returns the quantity fillable, capped at `quantity`.
    ///
    /// This is the fill-or-kill precheck: the book is not touched.
    pub(super) fn peek_match(&self, side: Side, quantity: u64, limit: Option<u64>) -> u64 {
        let mut available = 0u64;
        match side {
            Side::Buy => {
                for (&price, level) in self.asks.iter() {
                    if available >= quantity {
                        break;
                    }
                    if limit.is_some_and(|l| price > l) {
                        break;
                    }
                    available = available.saturating_add(level.total_quantity());
                }
            }
            Side::Sell => {
                for (&price, level) in self.bids.iter().rev() {
                    if available >= quantity {
                        break;
                    }
                    if limit.is_some_and(|l| price < l) {
                        break;
                    }
                    available = available.saturating_add(level.total_quantity());
                }
            }
        }
        available.min(quantity)
    }
}
