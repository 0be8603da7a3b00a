//! The replay session: event dispatch plus output wiring.
//!
//! A [`ReplaySession`] owns the book, the line parser and the configured
//! sinks, and drives one feed through them: parse a line, apply the event,
//! write any trades, emit a quote row if the observable top of book moved,
//! and advance the tick counter (which paces depth snapshots). Everything
//! runs synchronously on the caller's thread, in delivery order.

use crate::feed::{Event, Parser};
use crate::orderbook::{MatchResult, OrderBook};
use crate::price::PriceScale;
use crate::record::{QuoteCsv, SnapshotWriter, TradeCsv};
use std::io;
use std::path::PathBuf;
use tracing::trace;

/// Where a session writes its outputs. `None` disables a sink.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Label for the book, used in logs and snapshots.
    pub symbol: String,
    /// Ticks per unit of quote currency.
    pub scale: PriceScale,
    pub trades_csv: Option<PathBuf>,
    pub quotes_csv: Option<PathBuf>,
    pub snapshot_dir: Option<PathBuf>,
    /// Write a snapshot every N ticks; 0 disables snapshots.
    pub snapshot_every: u64,
    /// Levels per side captured in each snapshot.
    pub snapshot_depth: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            symbol: "BOOK".to_string(),
            scale: PriceScale::DEFAULT,
            trades_csv: None,
            quotes_csv: None,
            snapshot_dir: None,
            snapshot_every: 0,
            snapshot_depth: 10,
        }
    }
}

/// Single-threaded dispatcher over one order book and its sinks.
pub struct ReplaySession {
    book: OrderBook,
    parser: Parser,
    trades: Option<TradeCsv>,
    quotes: Option<QuoteCsv>,
    snapshots: Option<SnapshotWriter>,
    tick: u64,
}

impl ReplaySession {
    /// Open the configured sinks and build an empty book.
    pub fn new(config: SessionConfig) -> io::Result<Self> {
        let trades = config
            .trades_csv
            .as_deref()
            .map(|path| TradeCsv::create(path, config.scale))
            .transpose()?;
        let quotes = config
            .quotes_csv
            .as_deref()
            .map(|path| QuoteCsv::create(path, config.scale))
            .transpose()?;
        let snapshots = match (&config.snapshot_dir, config.snapshot_every) {
            (Some(dir), every) if every > 0 => Some(SnapshotWriter::new(
                dir,
                every,
                config.snapshot_depth,
                config.scale,
            )?),
            _ => None,
        };

        Ok(Self {
            book: OrderBook::new(&config.symbol),
            parser: Parser::new(config.scale),
            trades,
            quotes,
            snapshots,
            tick: 0,
        })
    }

    /// Parse and apply one input line. Returns whether the line produced an
    /// event; blanks, comments and malformed lines are dropped silently.
    pub fn process_line(&mut self, line: &str) -> io::Result<bool> {
        match self.parser.parse_line(line) {
            Some(event) => {
                self.apply(event)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Apply one typed event: mutate the book, write this event's trades, and
    /// emit a quote row if the observable top of book changed.
    pub fn apply(&mut self, event: Event) -> io::Result<Option<MatchResult>> {
        let timestamp = event.timestamp().to_string();
        let result = match event {
            Event::Add(order) => Some(self.book.add_order(order)),
            Event::Cancel { id, .. } => {
                if self.book.cancel_order(id).is_none() {
                    trace!("cancel of unknown order {id}: no action");
                }
                None
            }
            Event::Modify {
                id,
                price,
                quantity,
                ..
            } => {
                let modified = self.book.modify_order(id, price, quantity);
                if modified.is_none() {
                    trace!("modify of unknown order {id}: no action");
                }
                modified
            }
        };

        if let (Some(sink), Some(result)) = (self.trades.as_mut(), result.as_ref()) {
            for trade in &result.trades {
                sink.append(trade)?;
            }
        }
        if let Some(sink) = self.quotes.as_mut() {
            sink.emit_if_changed(&timestamp, self.book.top_of_book())?;
        }
        Ok(result)
    }

    /// Advance the tick counter; called once per input line, after the line
    /// is handled. Lands cadence snapshots.
    pub fn on_tick(&mut self) -> io::Result<()> {
        self.tick += 1;
        if let Some(snapshots) = &self.snapshots {
            snapshots.maybe_write(self.tick, &self.book)?;
        }
        Ok(())
    }

    /// Ticks seen so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// The book this session drives.
    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    /// Flush all sinks. Buffers also flush on drop; calling this surfaces
    /// write errors instead of swallowing them.
    pub fn finish(&mut self) -> io::Result<()> {
        if let Some(sink) = self.trades.as_mut() {
            sink.flush()?;
        }
        if let Some(sink) = self.quotes.as_mut() {
            sink.flush()?;
        }
        Ok(())
    }
}
