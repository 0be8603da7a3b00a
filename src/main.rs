//! Replay CLI: run an event feed file through the order book and record
//! trades, quote changes, depth snapshots and per-event latency.

use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tickbook::record::LatencyLog;
use tickbook::{PriceScale, ReplaySession, SessionConfig};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "tickbook",
    about = "Replay an order event feed through a limit order book"
)]
struct Args {
    /// Input feed file (human or compact line format)
    input: PathBuf,

    /// Trade log CSV; pass an empty path to disable
    #[arg(long, default_value = "data/trades.csv")]
    trades_csv: PathBuf,

    /// Top-of-book change CSV; pass an empty path to disable
    #[arg(long, default_value = "data/quotes.csv")]
    quotes_csv: PathBuf,

    /// Per-event latency CSV; pass an empty path to disable
    #[arg(long, default_value = "data/latency.csv")]
    latency_csv: PathBuf,

    /// Directory for periodic depth snapshots
    #[arg(long, default_value = "data/snapshots")]
    snap_dir: PathBuf,

    /// Write a snapshot every N input lines; 0 disables snapshots
    #[arg(long, default_value_t = 0)]
    snapshot_every: u64,

    /// Price ticks per unit of quote currency (100 = cents)
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..))]
    tick_scale: u64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tickbook: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> io::Result<()> {
    let input = File::open(&args.input).map_err(|err| {
        io::Error::new(
            err.kind(),
            format!("failed to open input {}: {err}", args.input.display()),
        )
    })?;

    let scale = PriceScale::new(args.tick_scale).unwrap_or_default();
    let symbol = args
        .input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "REPLAY".to_string());

    let enabled = |path: &PathBuf| {
        if path.as_os_str().is_empty() {
            None
        } else {
            Some(path.clone())
        }
    };
    let mut session = ReplaySession::new(SessionConfig {
        symbol,
        scale,
        trades_csv: enabled(&args.trades_csv),
        quotes_csv: enabled(&args.quotes_csv),
        snapshot_dir: enabled(&args.snap_dir),
        snapshot_every: args.snapshot_every,
        snapshot_depth: 10,
    })?;

    let mut latency = LatencyLog::with_capacity(200_000);
    for line in BufReader::new(input).lines() {
        let line = line?;
        let started = Instant::now();
        session.process_line(&line)?;
        latency.record(started.elapsed().as_nanos() as u64);
        session.on_tick()?;
    }
    session.finish()?;

    let top = session.book().top_of_book();
    match (top.bid_price, top.ask_price) {
        (Some(bid), Some(ask)) => {
            println!(
                "Final BestBid {} ({}), BestAsk {} ({})",
                scale.format_ticks(bid),
                top.bid_quantity,
                scale.format_ticks(ask),
                top.ask_quantity
            );
            let mid = (scale.to_price(bid) + scale.to_price(ask)) / 2.0;
            println!(
                "Spread {} Mid {:.*}",
                scale.format_ticks(ask.saturating_sub(bid)),
                scale.decimals() + 1,
                mid
            );
        }
        _ => println!("No full top-of-book at end."),
    }

    if !args.latency_csv.as_os_str().is_empty() {
        latency.save(&args.latency_csv)?;
    }
    info!(
        lines = latency.len(),
        trades = session.book().trades().len(),
        p50_ns = latency.percentile(50.0).unwrap_or(0),
        p99_ns = latency.percentile(99.0).unwrap_or(0),
        "replay complete"
    );
    Ok(())
}
