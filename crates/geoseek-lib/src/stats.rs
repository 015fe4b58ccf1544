//! Per-run search instrumentation.

use std::fmt;
use std::time::Instant;

use serde::Serialize;

/// Counters accumulated over the lifetime of one search run.
///
/// Owned by a single search; create a fresh instance per run.
#[derive(Debug, Clone)]
pub struct SearchStats {
    started: Instant,
    /// Nodes pushed onto the frontier.
    pub queued: u64,
    /// Nodes popped from the frontier and expanded.
    pub viewed: u64,
    /// Distance accumulated by the search, in metres.
    pub distance: f64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            queued: 0,
            viewed: 0,
            distance: 0.0,
        }
    }

    pub fn record_queued(&mut self) {
        self.queued += 1;
    }

    pub fn record_viewed(&mut self) {
        self.viewed += 1;
    }

    pub fn add_distance(&mut self, meters: f64) {
        self.distance += meters;
    }

    /// Milliseconds since construction.
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Freeze the counters into a serialisable value.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            queued: self.queued,
            viewed: self.viewed,
            elapsed_ms: self.elapsed_ms(),
            distance: self.distance,
        }
    }
}

impl Default for SearchStats {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SearchStats {{ queued: {}, viewed: {}, ms: {}, distance: {} }}",
            self.queued,
            self.viewed,
            self.elapsed_ms(),
            self.distance
        )
    }
}

/// Point-in-time copy of [`SearchStats`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub queued: u64,
    pub viewed: u64,
    pub elapsed_ms: u64,
    pub distance: f64,
}
