//! Output module
//!
//! Persists the finished collection.
//!
//! # Overview
//!
//! - [`CollectionSink`] is the seam the collector hands its result to
//! - [`JsonFileSink`] writes a JSON array of `{appid, name}` objects
//! - [`MemorySink`] keeps saved collections in memory

mod sink;
mod writer;

pub use sink::{CollectionSink, MemorySink};
pub use writer::{write_collection, JsonFileSink, JsonWriterConfig};
