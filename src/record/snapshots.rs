//! Periodic depth snapshot files.

use crate::orderbook::OrderBook;
use crate::price::PriceScale;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes a text snapshot of the book every N ticks.
///
/// File names are `snapshot_<9-digit-zero-padded-tick>.txt` under the
/// configured directory, which is created up front. Each file lists asks then
/// bids, best first down to the configured depth, followed by a top-of-book
/// summary line.
pub struct SnapshotWriter {
    dir: PathBuf,
    every: u64,
    depth: usize,
    scale: PriceScale,
}

impl SnapshotWriter {
    /// Configure a writer. `every` must be positive; cadence 0 is expressed
    /// by not constructing a writer at all.
    pub fn new(dir: &Path, every: u64, depth: usize, scale: PriceScale) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            every,
            depth,
            scale,
        })
    }

    /// Write a snapshot if `tick` lands on the cadence. Returns the path of
    /// the file written, if any.
    pub fn maybe_write(&self, tick: u64, book: &OrderBook) -> io::Result<Option<PathBuf>> {
        if self.every == 0 || tick % self.every != 0 {
            return Ok(None);
        }
        let path = self.dir.join(format!("snapshot_{tick:09}.txt"));
        let mut out = BufWriter::new(File::create(&path)?);
        self.render(&mut out, book)?;
        out.flush()?;
        Ok(Some(path))
    }

    /// Render the book as text: asks best first, bids best first, then the
    /// top-of-book line.
    fn render(&self, out: &mut impl Write, book: &OrderBook) -> io::Result<()> {
        writeln!(out, "=== SNAPSHOT ===")?;
        let snapshot = book.create_snapshot(self.depth);
        for level in &snapshot.asks {
            writeln!(
                out,
                "ASK {} x {}",
                self.scale.format_ticks(level.price),
                level.quantity
            )?;
        }
        for level in &snapshot.bids {
            writeln!(
                out,
                "BID {} x {}",
                self.scale.format_ticks(level.price),
                level.quantity
            )?;
        }

        let top = book.top_of_book();
        match (top.bid_price, top.ask_price) {
            (Some(bid), Some(ask)) => {
                let mid = (self.scale.to_price(bid) + self.scale.to_price(ask)) / 2.0;
                writeln!(
                    out,
                    "BestBid {} ({}), BestAsk {} ({}) | Spread {} | Mid {:.*}",
                    self.scale.format_ticks(bid),
                    top.bid_quantity,
                    self.scale.format_ticks(ask),
                    top.ask_quantity,
                    self.scale.format_ticks(ask.saturating_sub(bid)),
                    self.scale.decimals() + 1,
                    mid
                )?;
            }
            _ => writeln!(out, "No full top-of-book.")?,
        }
        writeln!(out, "================")
    }
}
