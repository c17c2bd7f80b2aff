//! Configuration for a collection run
//!
//! Settings can come from an optional YAML file; every field has a default
//! so an empty (or absent) file reproduces the stock behavior. The API key
//! is never part of the file: it is looked up once from the environment and
//! handed to the page source as an opaque [`ApiKey`].

use crate::error::{Error, Result};
use crate::types::OptionStringExt;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable holding the Steam Web API key
pub const API_KEY_ENV: &str = "STEAM_API_KEY";

/// Default Steam Web API host
pub const DEFAULT_BASE_URL: &str = "https://api.steampowered.com";

/// Largest page the store endpoint will return
pub const MAX_PAGE_SIZE: u32 = 50_000;

// ============================================================================
// Credential
// ============================================================================

/// Steam Web API key
///
/// `Debug` output is redacted so the key never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Read the key from [`API_KEY_ENV`]
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the key through a lookup function.
    ///
    /// Unset and empty values are both treated as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        lookup(API_KEY_ENV)
            .none_if_empty()
            .map(Self)
            .ok_or_else(|| Error::missing_credential(API_KEY_ENV))
    }

    /// The raw key, for building requests
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

// ============================================================================
// Settings
// ============================================================================

/// Complete run configuration loaded from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL for the Steam Web API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// `max_results` sent with every page request
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Which kinds of apps to include
    #[serde(default)]
    pub include: ContentFilter,

    /// Retry behavior for a failing page
    #[serde(default)]
    pub retry: RetrySettings,

    /// Where the collection is written
    #[serde(default)]
    pub output: OutputSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            timeout_secs: default_timeout(),
            include: ContentFilter::default(),
            retry: RetrySettings::default(),
            output: OutputSettings::default(),
        }
    }
}

impl Settings {
    /// Parse settings from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Self = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read settings file {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Check that values are usable
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url)?;

        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(Error::invalid_value(
                "page_size",
                format!("must be between 1 and {MAX_PAGE_SIZE}, got {}", self.page_size),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be positive"));
        }
        if self.retry.max_attempts == 0 {
            return Err(Error::invalid_value(
                "retry.max_attempts",
                "at least one attempt is required",
            ));
        }
        if !self.include.any() {
            return Err(Error::invalid_value(
                "include",
                "at least one content type must be included",
            ));
        }
        Ok(())
    }

    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> u32 {
    MAX_PAGE_SIZE
}

fn default_timeout() -> u64 {
    30
}

// ============================================================================
// Content Filter
// ============================================================================

/// App types requested from the store endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ContentFilter {
    #[serde(default = "default_true")]
    pub games: bool,
    #[serde(default)]
    pub dlc: bool,
    #[serde(default)]
    pub software: bool,
    #[serde(default)]
    pub videos: bool,
    #[serde(default)]
    pub hardware: bool,
}

impl Default for ContentFilter {
    fn default() -> Self {
        Self {
            games: true,
            dlc: false,
            software: false,
            videos: false,
            hardware: false,
        }
    }
}

impl ContentFilter {
    /// Query parameters understood by `IStoreService/GetAppList`
    pub fn query_params(&self) -> [(&'static str, bool); 5] {
        [
            ("include_games", self.games),
            ("include_dlc", self.dlc),
            ("include_software", self.software),
            ("include_videos", self.videos),
            ("include_hardware", self.hardware),
        ]
    }

    /// Check if anything is included at all
    pub fn any(&self) -> bool {
        self.query_params().iter().any(|(_, on)| *on)
    }
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Retry / Output
// ============================================================================

/// Retry settings for a single page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrySettings {
    /// Attempts per page before the run is aborted
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Fixed delay between attempts in seconds
    #[serde(default = "default_delay_secs")]
    pub delay_secs: u64,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            delay_secs: default_delay_secs(),
        }
    }
}

fn default_max_attempts() -> u32 {
    5
}

fn default_delay_secs() -> u64 {
    5
}

/// Output file settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Destination JSON file
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// Pretty-print the JSON
    #[serde(default)]
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            pretty: false,
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("data/apps.json")
}
