//! Pagination types and traits
//!
//! Defines the core pagination abstractions used by the collector.

use crate::error::{Error, Result};
use crate::types::{Cursor, Page};
use async_trait::async_trait;
use std::sync::Arc;

/// Result of advancing past a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available starting at this cursor
    Continue {
        /// Cursor for the next request
        cursor: Cursor,
    },
    /// No more pages
    Done,
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    /// Cursor for the next request
    pub cursor: Cursor,
    /// Whether another page should be requested
    pub has_more: bool,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            cursor: Cursor::START,
            has_more: true,
        }
    }
}

impl PaginationState {
    /// Create a new pagination state positioned at the start
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successfully fetched page.
    ///
    /// The cursor moves to the page's `next_cursor` and the continuation flag
    /// takes the page's `has_more`, whatever the cursor value is.
    pub fn advance(&mut self, page: &Page) -> NextPage {
        self.cursor = page.next_cursor;
        self.has_more = page.has_more;

        if self.has_more {
            NextPage::Continue {
                cursor: self.cursor,
            }
        } else {
            NextPage::Done
        }
    }
}

/// State of one page round.
///
/// A round starts in `Fetching { failures: 0 }` and ends in either
/// `Fetched` or `Failed`. Every retry uses the same cursor.
#[derive(Debug)]
pub enum RoundState {
    /// About to call the page source
    Fetching {
        /// Failed attempts so far in this round
        failures: u32,
    },
    /// The last attempt failed and the budget is not yet spent
    Retrying {
        /// Failed attempts so far in this round
        failures: u32,
        /// Error from the last attempt
        error: Error,
    },
    /// The page was fetched
    Fetched {
        /// The page
        page: Page,
        /// Failed attempts before this success
        failures: u32,
    },
    /// The retry budget for this cursor is exhausted
    Failed {
        /// Failed attempts in this round
        failures: u32,
        /// Error from the last attempt
        error: Error,
    },
}

impl RoundState {
    /// Initial state of a round
    pub fn start() -> Self {
        Self::Fetching { failures: 0 }
    }
}

/// Source of pages, one cursor at a time
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the page that starts after `cursor`
    async fn fetch_page(&self, cursor: Cursor) -> Result<Page>;
}

#[async_trait]
impl<T: PageSource + ?Sized> PageSource for Arc<T> {
    async fn fetch_page(&self, cursor: Cursor) -> Result<Page> {
        (**self).fetch_page(cursor).await
    }
}
