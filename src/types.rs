//! Common types used throughout steam-applist
//!
//! The catalog data model: items, pages, cursors and the accumulated
//! collection.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Cursor
// ============================================================================

/// Resume point for paginated retrieval.
///
/// The value is the app id after which the next page starts. It is treated
/// as opaque by the collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(u64);

impl Cursor {
    /// Cursor meaning "from the beginning"
    pub const START: Cursor = Cursor(0);

    /// Create a cursor from a raw value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Cursor {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

// ============================================================================
// Catalog Types
// ============================================================================

/// A single entry in the app catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// App identifier
    pub appid: u64,
    /// Display name (may be empty)
    pub name: String,
}

impl Item {
    /// Create a new item
    pub fn new(appid: u64, name: impl Into<String>) -> Self {
        Self {
            appid,
            name: name.into(),
        }
    }
}

/// Result of fetching one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Items in upstream order
    pub items: Vec<Item>,
    /// Where the next page starts
    pub next_cursor: Cursor,
    /// Whether further pages exist
    pub has_more: bool,
}

impl Page {
    /// Create a page that has more pages after it
    pub fn more(items: Vec<Item>, next_cursor: u64) -> Self {
        Self {
            items,
            next_cursor: Cursor::new(next_cursor),
            has_more: true,
        }
    }

    /// Create the final page
    pub fn last(items: Vec<Item>, next_cursor: u64) -> Self {
        Self {
            items,
            next_cursor: Cursor::new(next_cursor),
            has_more: false,
        }
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the page has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Every item fetched in one run, in fetch order
pub type Collection = Vec<Item>;

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}
