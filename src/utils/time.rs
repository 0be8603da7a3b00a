use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the UNIX epoch, used to stamp depth snapshots.
pub fn current_time_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as u64)
}
