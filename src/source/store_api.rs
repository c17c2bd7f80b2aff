//! Steam store app list source

use super::schema::decode_page;
use crate::config::{ApiKey, ContentFilter, Settings};
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::pagination::PageSource;
use crate::types::{Cursor, Page};
use async_trait::async_trait;
use tracing::debug;

/// Path of the app list endpoint, relative to the API base URL
pub const APP_LIST_PATH: &str = "/IStoreService/GetAppList/v1/";

/// Pages through `IStoreService/GetAppList/v1`
#[derive(Debug)]
pub struct StoreApiSource {
    client: HttpClient,
    api_key: ApiKey,
    page_size: u32,
    include: ContentFilter,
}

impl StoreApiSource {
    /// Create a source over an existing client
    pub fn new(client: HttpClient, api_key: ApiKey) -> Self {
        let defaults = Settings::default();
        Self {
            client,
            api_key,
            page_size: defaults.page_size,
            include: defaults.include,
        }
    }

    /// Build a source from settings
    pub fn from_settings(settings: &Settings, api_key: ApiKey) -> Result<Self> {
        let config = HttpClientConfig::builder()
            .base_url(settings.base_url.clone())
            .timeout(settings.timeout())
            .header("Accept", "application/json")
            .build();
        let client = HttpClient::with_config(config)?;

        Ok(Self::new(client, api_key)
            .with_page_size(settings.page_size)
            .with_include(settings.include))
    }

    /// Set `max_results`
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set which app types are requested
    #[must_use]
    pub fn with_include(mut self, include: ContentFilter) -> Self {
        self.include = include;
        self
    }

    /// Query for the page starting after `cursor`
    fn request_for(&self, cursor: Cursor) -> RequestConfig {
        let mut request = RequestConfig::new().query("key", self.api_key.expose());
        for (name, enabled) in self.include.query_params() {
            if enabled {
                request = request.query(name, true);
            }
        }
        request
            .query("max_results", self.page_size)
            .query("last_appid", cursor)
    }
}

#[async_trait]
impl PageSource for StoreApiSource {
    async fn fetch_page(&self, cursor: Cursor) -> Result<Page> {
        debug!(%cursor, page_size = self.page_size, "Requesting app list page");
        let body = self
            .client
            .get_text_with_config(APP_LIST_PATH, self.request_for(cursor))
            .await?;
        decode_page(&body, cursor)
    }
}
