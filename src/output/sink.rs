//! Persistence seam

use crate::error::{Error, Result};
use crate::types::{Collection, Item};
use std::sync::Mutex;

/// Destination for a finished collection
pub trait CollectionSink: Send + Sync {
    /// Persist the full collection
    fn save(&self, items: &[Item]) -> Result<()>;

    /// Human-readable destination, for logs and summaries
    fn describe(&self) -> String;
}

/// Sink that keeps every saved collection in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    saved: Mutex<Vec<Collection>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Every collection saved so far, oldest first
    pub fn saved(&self) -> Vec<Collection> {
        self.saved
            .lock()
            .map(|saved| saved.clone())
            .unwrap_or_default()
    }

    /// Number of times `save` was called
    pub fn save_count(&self) -> usize {
        self.saved.lock().map(|saved| saved.len()).unwrap_or_default()
    }
}

impl CollectionSink for MemorySink {
    fn save(&self, items: &[Item]) -> Result<()> {
        self.saved
            .lock()
            .map_err(|_| Error::output("memory sink lock poisoned"))?
            .push(items.to_vec());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
