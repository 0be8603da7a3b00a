//! Arena of resting orders with intrusive FIFO links.

use super::order::Order;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Generational handle to a resting order's FIFO slot.
    ///
    /// A key stays valid across all mutations of other slots and other levels;
    /// it is invalidated exactly when its own slot is removed.
    pub(super) struct OrderKey;
}

/// Backing storage for every resting order in the book.
pub(super) type OrderArena = SlotMap<OrderKey, OrderNode>;

/// A resting order plus its links in the owning level's FIFO queue.
#[derive(Clone, Debug)]
pub(super) struct OrderNode {
    pub(super) order: Order,
    /// Previous slot in the queue (toward the head). None at the head.
    pub(super) prev: Option<OrderKey>,
    /// Next slot in the queue (toward the tail). None at the tail.
    pub(super) next: Option<OrderKey>,
}
