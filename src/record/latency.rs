//! Per-event latency samples.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Nanosecond latency samples collected by the replay loop.
#[derive(Clone, Debug, Default)]
pub struct LatencyLog {
    samples: Vec<u64>,
}

impl LatencyLog {
    /// Pre-size for the expected number of events.
    pub fn with_capacity(events: usize) -> Self {
        Self {
            samples: Vec::with_capacity(events),
        }
    }

    /// Record one per-event sample, in nanoseconds.
    pub fn record(&mut self, nanos: u64) {
        self.samples.push(nanos);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The p-th percentile sample (p in 0..=100), by nearest-rank.
    pub fn percentile(&self, p: f64) -> Option<u64> {
        if self.samples.is_empty() {
            return None;
        }
        let mut sorted = self.samples.clone();
        sorted.sort_unstable();
        let rank = ((p / 100.0) * (sorted.len() - 1) as f64).round() as usize;
        sorted.get(rank.min(sorted.len() - 1)).copied()
    }

    /// Save the samples as a one-column CSV with header `ns`.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "ns")?;
        for sample in &self.samples {
            writeln!(writer, "{sample}")?;
        }
        writer.flush()
    }
}
