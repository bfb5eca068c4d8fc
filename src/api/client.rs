// file: src/api/client.rs
// description: HTTP client for search and metadata requests
// reference: https://docs.rs/reqwest

use crate::error::Result;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// Client bound to the base URL the prober selected. One request at a time,
/// plain GETs, no authentication, no custom headers.
pub struct LookupClient {
    client: Client,
    base_url: String,
}

impl LookupClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Fetch the raw XML search response for an already-encoded query.
    pub async fn search(&self, encoded_query: &str) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.base_url, encoded_query);
        debug!("Searching: {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;

        debug!("Search response: {} bytes", bytes.len());
        Ok(bytes.to_vec())
    }

    /// Fetch an entity's JSON data document.
    pub async fn fetch_metadata(&self, address: &str) -> Result<Value> {
        debug!("Fetching metadata document: {}", address);

        let document = self
            .client
            .get(address)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(document)
    }
}
