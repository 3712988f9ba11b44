//! AI responses API.

use serde_json::{json, Value};

use crate::client::ZapiClient;
use crate::error::{Error, Result};

use super::require;

/// Export formats the service supports.
const EXPORT_FORMATS: &[&str] = &["json", "txt", "markdown", "pdf"];

/// API for AI completion responses.
pub struct ResponsesApi {
    client: ZapiClient,
}

impl ResponsesApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// Create a completion.
    pub async fn create(&self, data: &Value) -> Result<Value> {
        self.client.post("responses", Some(data)).await
    }

    /// List stored responses.
    pub async fn list(&self, options: Option<&Value>) -> Result<Value> {
        self.client.get_query("responses", options).await
    }

    /// Get one response.
    pub async fn get(&self, response_id: &str) -> Result<Value> {
        require("Response id", response_id)?;
        self.client.get(&format!("responses/{response_id}")).await
    }

    /// Update response metadata such as title or tags.
    pub async fn update(&self, response_id: &str, data: &Value) -> Result<Value> {
        require("Response id", response_id)?;
        self.client
            .put(&format!("responses/{response_id}"), Some(data))
            .await
    }

    /// Delete a response.
    pub async fn delete(&self, response_id: &str) -> Result<Value> {
        require("Response id", response_id)?;
        self.client.delete(&format!("responses/{response_id}")).await
    }

    /// Export a response as `json`, `txt`, `markdown` or `pdf`.
    pub async fn export(&self, response_id: &str, format: &str) -> Result<Value> {
        require("Response id", response_id)?;
        if !EXPORT_FORMATS.contains(&format) {
            return Err(Error::validation(format!("Unsupported format: {format}")));
        }
        let query = json!({ "format": format });
        self.client
            .get_query(&format!("responses/{response_id}/export"), Some(&query))
            .await
    }

    /// Usage statistics across responses.
    pub async fn stats(&self, options: Option<&Value>) -> Result<Value> {
        self.client.get_query("responses/stats", options).await
    }

    /// Full-text search over responses. Requires a non-empty `query` option.
    pub async fn search(&self, options: &Value) -> Result<Value> {
        let query = options
            .get("query")
            .and_then(Value::as_str)
            .unwrap_or_default();
        require("Search query", query)?;
        self.client.get_query("responses/search", Some(options)).await
    }

    /// Known response categories.
    pub async fn categories(&self) -> Result<Value> {
        self.client.get("responses/categories").await
    }

    /// Known response tags.
    pub async fn tags(&self) -> Result<Value> {
        self.client.get("responses/tags").await
    }

    /// Toggle a response in or out of favorites.
    pub async fn toggle_favorite(&self, response_id: &str) -> Result<Value> {
        require("Response id", response_id)?;
        self.client
            .patch(&format!("responses/{response_id}/favorite"), None)
            .await
    }

    /// Create a shareable link for a response.
    pub async fn share(&self, response_id: &str, options: Option<&Value>) -> Result<Value> {
        require("Response id", response_id)?;
        self.client
            .post(&format!("responses/{response_id}/share"), options)
            .await
    }
}
