//! JSON file writer
//!
//! Writes the collection as a single JSON array. The file is first written
//! next to the destination and then renamed into place, so readers never see
//! a partial file.

use super::sink::CollectionSink;
use crate::error::{Error, Result};
use crate::types::Item;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration for the JSON writer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonWriterConfig {
    pretty: bool,
}

impl JsonWriterConfig {
    /// Create a new config with default settings (compact output)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable pretty printing
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Get pretty printing enabled
    #[must_use]
    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

/// Write items to `path` as a JSON array, returning the bytes written
pub fn write_collection(path: &Path, items: &[Item], config: JsonWriterConfig) -> Result<u64> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = temp_path_for(path)?;
    let result = write_to(&tmp_path, items, config);
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    let bytes = result?;

    fs::rename(&tmp_path, path)?;
    debug!(path = %path.display(), bytes, items = items.len(), "Wrote collection");
    Ok(bytes)
}

fn write_to(path: &Path, items: &[Item], config: JsonWriterConfig) -> Result<u64> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    serialize_into(&mut writer, items, config)?;
    writer.flush()?;

    let file = writer
        .into_inner()
        .map_err(|e| Error::output(format!("Failed to flush {}: {e}", path.display())))?;
    file.sync_all()?;
    Ok(file.metadata()?.len())
}

/// Serialize items as a JSON array into `writer`
pub(crate) fn serialize_into<W: Write>(
    writer: W,
    items: &[Item],
    config: JsonWriterConfig,
) -> Result<()> {
    let result = if config.pretty {
        serde_json::to_writer_pretty(writer, items)
    } else {
        serde_json::to_writer(writer, items)
    };
    result.map_err(|e| Error::output(format!("Failed to serialize collection: {e}")))
}

/// Sibling path used while writing
fn temp_path_for(path: &Path) -> Result<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| Error::output(format!("Not a file path: {}", path.display())))?;
    let mut tmp_name = name.to_os_string();
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}

/// Sink that writes the collection to a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
    config: JsonWriterConfig,
}

impl JsonFileSink {
    /// Create a sink writing compact JSON to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: JsonWriterConfig::default(),
        }
    }

    /// Set the writer config
    #[must_use]
    pub fn with_config(mut self, config: JsonWriterConfig) -> Self {
        self.config = config;
        self
    }

    /// Destination path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CollectionSink for JsonFileSink {
    fn save(&self, items: &[Item]) -> Result<()> {
        write_collection(&self.path, items, self.config)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
