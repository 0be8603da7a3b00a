//! # Single-Symbol Limit Order Book Replay Engine
//!
//! A continuous limit order book (CLOB) for event-replay workloads: historical
//! feeds, simulations, and latency benchmarking. The engine ingests a stream of
//! order events (add / cancel / modify), matches aggressive orders against
//! resting liquidity under strict price-time priority, and maintains queryable
//! top-of-book and depth state.
//!
//! ## Key Features
//!
//! - **Price-time priority matching**: aggressive orders consume opposing
//!   levels from the best price inward, FIFO within each level, emitting trades
//!   at the maker's resting price.
//!
//! - **Time-in-force variants**: GTC, IOC, FOK and DAY, with an all-or-nothing
//!   precheck for FOK and no resting remainder for IOC/FOK/market orders.
//!
//! - **O(1) cancel and modify**: an order index maps ids to generational
//!   handles into per-level intrusive FIFO queues, so unrelated mutations never
//!   invalidate a resting order's handle.
//!
//! - **Integer tick prices**: all engine arithmetic is on integer ticks.
//!   Decimal prices exist only at the boundary, converted by a configurable
//!   tick scale when parsing input lines and when formatting CSV output.
//!
//! - **Replay tooling**: a line parser for two wire formats, CSV sinks for
//!   trades and top-of-book changes, periodic depth snapshots, and per-event
//!   latency capture in the command-line front end.
//!
//! ## Design Goals
//!
//! 1. **Correctness**: the matching semantics and book invariants hold after
//!    every processed event, and are enforced by unit, scenario, and
//!    property-based tests.
//! 2. **Per-event latency**: hot-path operations on levels and handles are
//!    constant-time; price lookups are logarithmic in the number of levels.
//! 3. **Determinism**: strictly single-threaded; events are applied in arrival
//!    order and outputs are reproducible across runs.
//!
//! ## Non-goals
//!
//! Multi-symbol books, self-trade prevention, iceberg/stop/pegged orders,
//! persistence, concurrent ingestion, and network I/O are out of scope.

pub mod feed;
pub mod orderbook;
pub mod price;
pub mod record;
pub mod session;

mod utils;

pub use orderbook::{
    MatchResult, Order, OrderBook, OrderBookError, OrderBookSnapshot, OrderId, OrderKind, Side,
    TimeInForce, TopOfBook, Trade,
};
pub use price::PriceScale;
pub use session::{ReplaySession, SessionConfig};
pub use utils::current_time_millis;
