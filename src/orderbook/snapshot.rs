//! Order book depth snapshots for market data.

use serde::{Deserialize, Serialize};

/// One price level of a snapshot: aggregate quantity and queue length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDepth {
    /// Level price in ticks.
    pub price: u64,
    /// Sum of residual quantities queued at the level.
    pub quantity: u64,
    /// Number of orders queued at the level.
    pub orders: usize,
}

/// A depth snapshot of the order book at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// The symbol of the book this snapshot was taken from.
    pub symbol: String,
    /// Milliseconds since the UNIX epoch at snapshot time.
    pub timestamp: u64,
    /// Bid levels, best (highest) first.
    pub bids: Vec<LevelDepth>,
    /// Ask levels, best (lowest) first.
    pub asks: Vec<LevelDepth>,
}

impl OrderBookSnapshot {
    /// Best bid price and quantity, if the side is present.
    pub fn best_bid(&self) -> Option<(u64, u64)> {
        self.bids.first().map(|level| (level.price, level.quantity))
    }

    /// Best ask price and quantity, if the side is present.
    pub fn best_ask(&self) -> Option<(u64, u64)> {
        self.asks.first().map(|level| (level.price, level.quantity))
    }

    /// Best ask minus best bid, in ticks.
    pub fn spread_ticks(&self) -> Option<u64> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid, _)), Some((ask, _))) => Some(ask.saturating_sub(bid)),
            _ => None,
        }
    }

    /// Total quantity across the captured bid levels.
    pub fn total_bid_quantity(&self) -> u64 {
        self.bids.iter().map(|level| level.quantity).sum()
    }

    /// Total quantity across the captured ask levels.
    pub fn total_ask_quantity(&self) -> u64 {
        self.asks.iter().map(|level| level.quantity).sum()
    }
}
