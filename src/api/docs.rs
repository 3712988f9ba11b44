//! Docs API.

use serde_json::Value;

use crate::client::ZapiClient;
use crate::error::Result;

use super::require;

/// API for the hosted API documentation.
pub struct DocsApi {
    client: ZapiClient,
}

impl DocsApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// List documentation files.
    pub async fn list(&self) -> Result<Value> {
        self.client.get("api/docs").await
    }

    /// Get one documentation file by name.
    pub async fn get(&self, filename: &str) -> Result<Value> {
        require("Filename", filename)?;
        self.client.get(&format!("api/docs/{filename}")).await
    }
}
