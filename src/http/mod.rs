//! HTTP client module
//!
//! Provides the HTTP client used by the page source.
//!
//! # Features
//!
//! - **Base URL handling**: Relative paths are joined onto a configured base
//! - **Error mapping**: Timeouts, transport failures and non-success statuses
//!   become distinct [`Error`](crate::Error) variants
//! - **Single attempt**: No retries here; the collector owns the retry budget

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
