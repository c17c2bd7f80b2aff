//! Execution engine module
//!
//! The collector: walks the paged app list to completion with a bounded
//! retry budget per page.
//!
//! # Overview
//!
//! - `Collector` - Drives a [`PageSource`] from the start cursor until a page
//!   reports no more results, then hands the collection to a
//!   [`CollectionSink`] exactly once
//! - `RunStats` / `RunSummary` - Counters and timing for a run
//!
//! Pages are fetched strictly one after another. A failed fetch is retried
//! with the same cursor after a fixed delay; when one cursor fails
//! `max_attempts` times in a row the run aborts with
//! [`Error::PageFetchFailed`] and nothing is saved.

mod types;

pub use types::{RunStats, RunSummary};

use crate::error::{Error, Result};
use crate::output::CollectionSink;
use crate::pagination::{NextPage, PageSource, PaginationState, RetryPolicy, RoundState};
use crate::types::{Collection, Cursor, Page};
use chrono::Utc;
use tracing::{debug, error, info, warn};

/// Collects every page of the app list
pub struct Collector<S> {
    /// Page source
    source: S,
    /// Retry budget per page
    retry: RetryPolicy,
    /// Statistics
    stats: RunStats,
}

impl<S: PageSource> Collector<S> {
    /// Create a collector with the default retry policy
    pub fn new(source: S) -> Self {
        Self {
            source,
            retry: RetryPolicy::default(),
            stats: RunStats::default(),
        }
    }

    /// Set the retry policy
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Get statistics
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Collect the whole catalog and save it.
    ///
    /// The sink is called once on success and never on failure.
    pub async fn run(&mut self, sink: &dyn CollectionSink) -> Result<RunSummary> {
        let started_at = Utc::now();
        let items = self.collect().await?;

        info!(total = items.len(), "Total apps fetched");
        sink.save(&items)?;
        info!(destination = %sink.describe(), "Saved app list");

        Ok(RunSummary {
            stats: self.stats,
            destination: sink.describe(),
            started_at,
            finished_at: Utc::now(),
        })
    }

    /// Walk every page and return the items in fetch order
    pub async fn collect(&mut self) -> Result<Collection> {
        self.stats = RunStats::default();
        let mut state = PaginationState::new();
        let mut items = Collection::new();

        while state.has_more {
            let cursor = state.cursor;
            let page = self.fetch_round(cursor).await?;
            let page_len = page.len();

            self.stats.add_page(page_len);
            let next = state.advance(&page);
            items.extend(page.items);

            if next == (NextPage::Continue { cursor }) {
                warn!(%cursor, "Page reported more results without moving the cursor");
            }
            info!(
                fetched = items.len(),
                page_items = page_len,
                last_appid = %state.cursor,
                "Fetched {} apps so far",
                items.len()
            );
        }

        Ok(items)
    }

    /// Fetch one page, retrying the same cursor until it succeeds or the
    /// budget runs out
    async fn fetch_round(&mut self, cursor: Cursor) -> Result<Page> {
        let mut round = RoundState::start();

        loop {
            round = match round {
                RoundState::Fetching { failures } => {
                    debug!(%cursor, attempt = failures + 1, "Fetching page");
                    match self.source.fetch_page(cursor).await {
                        Ok(page) => RoundState::Fetched { page, failures },
                        Err(error) => self.retry.after_failure(failures, error),
                    }
                }
                RoundState::Retrying { failures, error } => {
                    self.stats.add_retry();
                    warn!(
                        %cursor,
                        attempt = failures,
                        max_attempts = self.retry.max_attempts(),
                        error = %error,
                        "Error fetching app list"
                    );
                    info!("Retrying in {} seconds...", self.retry.delay().as_secs());
                    tokio::time::sleep(self.retry.delay()).await;
                    RoundState::Fetching { failures }
                }
                RoundState::Fetched { page, failures } => {
                    if failures > 0 {
                        info!(%cursor, failures, "Recovered after retrying");
                    }
                    return Ok(page);
                }
                RoundState::Failed { failures, error } => {
                    error!(
                        %cursor,
                        error = %error,
                        "Failed to fetch app list after {failures} attempts"
                    );
                    return Err(Error::PageFetchFailed {
                        cursor,
                        attempts: failures,
                        source: Box::new(error),
                    });
                }
            };
        }
    }
}

impl<S> std::fmt::Debug for Collector<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collector")
            .field("retry", &self.retry)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
