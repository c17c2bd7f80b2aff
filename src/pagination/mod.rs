//! Pagination module
//!
//! Cursor-based pagination with a bounded, fixed-delay retry budget per page.
//!
//! # Overview
//!
//! - [`PageSource`] is the seam between the collector and the transport:
//!   given a cursor it returns one [`Page`](crate::types::Page) or an error.
//! - [`PaginationState`] tracks the cursor and continuation flag across pages.
//! - [`RetryPolicy`] and [`RoundState`] describe what happens inside a single
//!   page round when fetches fail.

mod retry;
mod types;

pub use retry::RetryPolicy;
pub use types::{NextPage, PageSource, PaginationState, RoundState};
