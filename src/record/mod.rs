//! Output sinks: trade and quote CSVs, depth snapshots, latency samples.
//!
//! Sinks are external collaborators of the engine: the replay session feeds
//! them after each event, and they own their formatting (tick prices become
//! decimals here, at egress). All writes are synchronous and buffered;
//! buffers flush on [`Drop`] and on explicit `flush` calls.

pub mod csv;
pub mod latency;
pub mod snapshots;


pub use csv::{QuoteCsv, TradeCsv};
pub use latency::LatencyLog;
pub use snapshots::SnapshotWriter;
