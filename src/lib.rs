// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # steam-applist
//!
//! Collects the complete Steam store app catalog by walking the cursor-paged
//! `IStoreService/GetAppList/v1` endpoint, and writes it out as one JSON file.
//!
//! ## Features
//!
//! - **Cursor Pagination**: Follows `last_appid` until the API reports no more results
//! - **Bounded Retry**: Each page gets 5 attempts with a fixed 5 second delay
//! - **All or Nothing**: The file is written once, only after every page succeeded
//! - **Validated Responses**: Bodies are decoded through an explicit schema
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use steam_applist::config::{ApiKey, Settings};
//! use steam_applist::engine::Collector;
//! use steam_applist::output::JsonFileSink;
//! use steam_applist::source::StoreApiSource;
//!
//! #[tokio::main]
//! async fn main() -> steam_applist::Result<()> {
//!     let settings = Settings::default();
//!     let source = StoreApiSource::from_settings(&settings, ApiKey::from_env()?)?;
//!     let sink = JsonFileSink::new("data/apps.json");
//!
//!     let summary = Collector::new(source).run(&sink).await?;
//!     println!("{} apps", summary.stats.items_collected);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐  cursor   ┌──────────────┐  GET   ┌────────────┐
//! │Collector │ ────────► │ PageSource   │ ─────► │ HttpClient │
//! │          │ ◄──────── │ (StoreApi)   │ ◄───── │            │
//! └────┬─────┘ Page/err  └──────────────┘  body  └────────────┘
//!      │ once, on success
//!      ▼
//! ┌──────────────┐
//! │CollectionSink│  JSON file
//! └──────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Catalog data model
pub mod types;

/// Settings and credential
pub mod config;

/// HTTP client
pub mod http;

/// Pagination state and retry policy
pub mod pagination;

/// Page sources
pub mod source;

/// Collection sinks
pub mod output;

/// The collector
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::{Collection, Cursor, Item, Page};

pub use engine::{Collector, RunSummary};
pub use output::{CollectionSink, JsonFileSink};
pub use pagination::{PageSource, RetryPolicy};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
