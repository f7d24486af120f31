//! Timestamp sources.

use std::time::{SystemTime, UNIX_EPOCH};

/// Whole UTC seconds since the Unix epoch.
pub trait Clock: Send + Sync {
    fn unix_seconds(&self) -> i64;
}

/// Wall clock. Times before the epoch floor to negative seconds.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_seconds(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_secs() as i64,
            Err(e) => {
                let d = e.duration();
                let secs = d.as_secs() as i64;
                if d.subsec_nanos() > 0 {
                    -secs - 1
                } else {
                    -secs
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn unix_seconds(&self) -> i64 {
        self.0
    }
}
