//! Page sources
//!
//! [`StoreApiSource`] fetches pages from the Steam store's
//! `IStoreService/GetAppList/v1` endpoint and decodes them through an
//! explicit response schema.

mod schema;
mod store_api;

pub use schema::{decode_page, AppListEnvelope, AppListResponse, RawApp};
pub use store_api::{StoreApiSource, APP_LIST_PATH};

#[cfg(test)]
mod tests;
