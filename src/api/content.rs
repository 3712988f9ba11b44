//! Content API.

use serde_json::{json, Value};

use crate::client::ZapiClient;
use crate::error::{Error, Result};

use super::{metadata_path, require};

/// API for CMS-style content records.
pub struct ContentApi {
    client: ZapiClient,
}

impl ContentApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// List content.
    pub async fn list(&self, options: Option<&Value>) -> Result<Value> {
        self.client.get_query("content", options).await
    }

    /// Create a content record.
    pub async fn create(&self, data: &Value) -> Result<Value> {
        self.client.post("content", Some(data)).await
    }

    /// Get a content record by id.
    pub async fn get(&self, content_id: &str) -> Result<Value> {
        require("Content id", content_id)?;
        self.client.get(&format!("content/{content_id}")).await
    }

    /// Update a content record.
    pub async fn update(&self, content_id: &str, data: &Value) -> Result<Value> {
        require("Content id", content_id)?;
        self.client
            .put(&format!("content/{content_id}"), Some(data))
            .await
    }

    /// Delete a content record.
    pub async fn delete(&self, content_id: &str) -> Result<Value> {
        require("Content id", content_id)?;
        self.client.delete(&format!("content/{content_id}")).await
    }

    /// Available content categories.
    pub async fn categories(&self) -> Result<Value> {
        self.client.get("content/categories/list").await
    }

    /// Available content types.
    pub async fn types(&self) -> Result<Value> {
        self.client.get("content/types/list").await
    }

    /// Available content languages.
    pub async fn languages(&self) -> Result<Value> {
        self.client.get("content/languages/list").await
    }

    /// Full-text search. The options must carry a non-empty `query` key.
    pub async fn search_advanced(&self, options: &Value) -> Result<Value> {
        let has_query = options
            .get("query")
            .and_then(Value::as_str)
            .is_some_and(|q| !q.trim().is_empty());
        if !has_query {
            return Err(Error::validation("Search query must not be empty"));
        }
        self.client
            .get_query("content/search/advanced", Some(options))
            .await
    }

    /// Content statistics summary.
    pub async fn stats(&self) -> Result<Value> {
        self.client.get("content/stats/summary").await
    }

    /// Read content metadata. An empty path returns the whole document.
    pub async fn get_metadata(&self, content_id: &str, path: &str) -> Result<Value> {
        require("Content id", content_id)?;
        let base = format!("content/{content_id}/metadata");
        self.client.get(&metadata_path(&base, path)).await
    }

    /// Replace the metadata value at a path.
    pub async fn update_metadata(
        &self,
        content_id: &str,
        path: &str,
        value: &Value,
    ) -> Result<Value> {
        require("Content id", content_id)?;
        require("Metadata path", path)?;
        self.client
            .put(
                &format!("content/{content_id}/metadata/{path}"),
                Some(&json!({ "value": value })),
            )
            .await
    }

    /// Delete the metadata value at a path.
    pub async fn delete_metadata(&self, content_id: &str, path: &str) -> Result<Value> {
        require("Content id", content_id)?;
        require("Metadata path", path)?;
        self.client
            .delete(&format!("content/{content_id}/metadata/{path}"))
            .await
    }

    /// Get published content by slug, no authentication context required.
    pub async fn public(&self, slug: &str) -> Result<Value> {
        require("Slug", slug)?;
        self.client.get(&format!("content/public/{slug}")).await
    }
}
