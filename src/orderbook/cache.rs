//! Cached top-of-book state.

use serde::{Deserialize, Serialize};

/// The observable top of the book: best price and aggregate quantity per side.
///
/// `None` is the "side absent" sentinel; it is never conflated with a real
/// price. The book recomputes this cache after every structural change, so
/// reads are O(1).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopOfBook {
    /// Highest resting bid price in ticks, if any bid rests.
    pub bid_price: Option<u64>,
    /// Total quantity at the best bid; 0 when the side is empty.
    pub bid_quantity: u64,
    /// Lowest resting ask price in ticks, if any ask rests.
    pub ask_price: Option<u64>,
    /// Total quantity at the best ask; 0 when the side is empty.
    pub ask_quantity: u64,
}

impl TopOfBook {
    /// Both sides present.
    pub fn is_two_sided(&self) -> bool {
        self.bid_price.is_some() && self.ask_price.is_some()
    }

    /// Best ask minus best bid, in ticks. `None` unless both sides rest.
    pub fn spread_ticks(&self) -> Option<u64> {
        match (self.bid_price, self.ask_price) {
            (Some(bid), Some(ask)) => Some(ask.saturating_sub(bid)),
            _ => None,
        }
    }
}
