//! CSV sinks for trades and top-of-book quote changes.

use crate::orderbook::{TopOfBook, Trade};
use crate::price::PriceScale;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

fn create_with_parents(path: &Path) -> io::Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(BufWriter::new(File::create(path)?))
}

/// Trade log sink: one row per executed trade.
///
/// Header: `timestamp,price,qty,buy_id,sell_id`. Prices are written as
/// decimals at the configured scale.
pub struct TradeCsv {
    writer: BufWriter<File>,
    scale: PriceScale,
}

impl TradeCsv {
    /// Create (truncate) the file and write the header. Parent directories
    /// are created as needed.
    pub fn create(path: &Path, scale: PriceScale) -> io::Result<Self> {
        let mut writer = create_with_parents(path)?;
        writeln!(writer, "timestamp,price,qty,buy_id,sell_id")?;
        Ok(Self { writer, scale })
    }

    /// Append one trade row.
    pub fn append(&mut self, trade: &Trade) -> io::Result<()> {
        writeln!(
            self.writer,
            "{},{},{},{},{}",
            trade.timestamp,
            self.scale.format_ticks(trade.price),
            trade.quantity,
            trade.buy_id,
            trade.sell_id
        )
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Quote sink: one row per observable top-of-book change.
///
/// Header: `timestamp,best_bid,bid_qty,best_ask,ask_qty,spread,mid`. The sink
/// owns the suppression state: a row is written only when one of the four
/// observable fields differs from the last emitted snapshot. Absent sides
/// leave their price cell empty (quantity prints 0), and spread/mid are empty
/// unless both sides are present.
pub struct QuoteCsv {
    writer: BufWriter<File>,
    scale: PriceScale,
    last_quoted: TopOfBook,
}

impl QuoteCsv {
    /// Create (truncate) the file and write the header. Parent directories
    /// are created as needed.
    pub fn create(path: &Path, scale: PriceScale) -> io::Result<Self> {
        let mut writer = create_with_parents(path)?;
        writeln!(writer, "timestamp,best_bid,bid_qty,best_ask,ask_qty,spread,mid")?;
        Ok(Self {
            writer,
            scale,
            last_quoted: TopOfBook::default(),
        })
    }

    /// Write a quote row if `top` differs from the last emitted snapshot.
    /// Returns whether a row was written.
    pub fn emit_if_changed(&mut self, timestamp: &str, top: TopOfBook) -> io::Result<bool> {
        if top == self.last_quoted {
            return Ok(false);
        }
        self.last_quoted = top;

        let bid = top
            .bid_price
            .map(|price| self.scale.format_ticks(price))
            .unwrap_or_default();
        let ask = top
            .ask_price
            .map(|price| self.scale.format_ticks(price))
            .unwrap_or_default();
        let (spread, mid) = match (top.bid_price, top.ask_price) {
            (Some(bid), Some(ask)) => {
                let mid = (self.scale.to_price(bid) + self.scale.to_price(ask)) / 2.0;
                (
                    self.scale.format_ticks(ask.saturating_sub(bid)),
                    format!("{:.*}", self.scale.decimals() + 1, mid),
                )
            }
            _ => (String::new(), String::new()),
        };

        writeln!(
            self.writer,
            "{},{},{},{},{},{},{}",
            timestamp, bid, top.bid_quantity, ask, top.ask_quantity, spread, mid
        )?;
        Ok(true)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
