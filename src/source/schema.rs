//! Response schema for `IStoreService/GetAppList/v1`
//!
//! ```json
//! {
//!   "response": {
//!     "apps": [{ "appid": 10, "name": "Counter-Strike", "last_modified": 1745368572 }],
//!     "have_more_results": true,
//!     "last_appid": 10
//!   }
//! }
//! ```
//!
//! Only `response.apps[].appid` is required. The endpoint leaves out
//! `have_more_results` and `last_appid` on the final page. Optional fields
//! may also be `null`, which reads the same as absent.

use crate::error::{Error, Result};
use crate::types::{Cursor, Item, Page};
use serde::Deserialize;

/// Top-level body
#[derive(Debug, Clone, Deserialize)]
pub struct AppListEnvelope {
    #[serde(default)]
    pub response: Option<AppListResponse>,
}

/// The `response` object
#[derive(Debug, Clone, Deserialize)]
pub struct AppListResponse {
    #[serde(default)]
    pub apps: Option<Vec<RawApp>>,
    #[serde(default)]
    pub have_more_results: Option<bool>,
    #[serde(default)]
    pub last_appid: Option<u64>,
}

/// One entry of `apps`
#[derive(Debug, Clone, Deserialize)]
pub struct RawApp {
    pub appid: u64,
    #[serde(default)]
    pub name: Option<String>,
}

impl From<RawApp> for Item {
    fn from(app: RawApp) -> Self {
        Item::new(app.appid, app.name.unwrap_or_default())
    }
}

impl AppListEnvelope {
    /// Convert into a page, given the cursor the request was made with
    pub fn into_page(self, requested: Cursor) -> Result<Page> {
        let response = self
            .response
            .ok_or_else(|| Error::malformed("missing 'response' object"))?;
        let apps = response
            .apps
            .ok_or_else(|| Error::malformed("missing 'response.apps' list"))?;

        let items: Vec<Item> = apps.into_iter().map(Item::from).collect();
        let next_cursor = response
            .last_appid
            .or_else(|| items.last().map(|item| item.appid))
            .map_or(requested, Cursor::new);

        Ok(Page {
            items,
            next_cursor,
            has_more: response.have_more_results.unwrap_or_default(),
        })
    }
}

/// Decode a response body into a page.
///
/// Any body that does not match the schema is [`Error::MalformedPage`].
pub fn decode_page(body: &str, requested: Cursor) -> Result<Page> {
    let envelope: AppListEnvelope = serde_json::from_str(body)
        .map_err(|e| Error::malformed(format!("invalid response body: {e}")))?;
    envelope.into_page(requested)
}
