//! Engine types
//!
//! Statistics and summary for a collection run.

use chrono::{DateTime, Utc};

/// Counters kept while collecting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Pages fetched successfully
    pub pages_fetched: u32,
    /// Items collected
    pub items_collected: usize,
    /// Failed attempts that were followed by a retry
    pub retries: u32,
}

impl RunStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fetched page
    pub fn add_page(&mut self, items: usize) {
        self.pages_fetched += 1;
        self.items_collected += items;
    }

    /// Add a retry
    pub fn add_retry(&mut self) {
        self.retries += 1;
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Counters for the run
    pub stats: RunStats,
    /// Where the collection was saved
    pub destination: String,
    /// When collection started
    pub started_at: DateTime<Utc>,
    /// When the collection was saved
    pub finished_at: DateTime<Utc>,
}

impl RunSummary {
    /// Wall-clock duration of the run
    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}
