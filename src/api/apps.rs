//! Apps API.

use serde_json::Value;

use crate::client::ZapiClient;
use crate::error::Result;

use super::{metadata_path, require};

/// API for tenant applications.
pub struct AppsApi {
    client: ZapiClient,
}

impl AppsApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// List apps.
    pub async fn list(&self, options: Option<&Value>) -> Result<Value> {
        self.client.get_query("apps", options).await
    }

    /// Create an app.
    pub async fn create(&self, data: &Value) -> Result<Value> {
        self.client.post("apps", Some(data)).await
    }

    /// Get an app by id.
    pub async fn get(&self, app_id: &str) -> Result<Value> {
        require("App id", app_id)?;
        self.client.get(&format!("apps/{app_id}")).await
    }

    /// Update an app.
    pub async fn update(&self, app_id: &str, data: &Value) -> Result<Value> {
        require("App id", app_id)?;
        self.client.put(&format!("apps/{app_id}"), Some(data)).await
    }

    /// Delete an app.
    pub async fn delete(&self, app_id: &str) -> Result<Value> {
        require("App id", app_id)?;
        self.client.delete(&format!("apps/{app_id}")).await
    }

    /// Usage statistics across all apps.
    pub async fn stats(&self, options: Option<&Value>) -> Result<Value> {
        self.client.get_query("apps/stats", options).await
    }

    /// Usage statistics for one app.
    pub async fn app_stats(&self, app_id: &str, options: Option<&Value>) -> Result<Value> {
        require("App id", app_id)?;
        self.client
            .get_query(&format!("apps/stats/{app_id}"), options)
            .await
    }

    /// Reset an app's usage counters.
    pub async fn reset_usage(&self, app_id: &str) -> Result<Value> {
        require("App id", app_id)?;
        self.client
            .post(&format!("apps/reset-usage/{app_id}"), None)
            .await
    }

    /// Read app metadata. An empty path returns the whole document.
    pub async fn get_metadata(&self, app_id: &str, path: &str) -> Result<Value> {
        require("App id", app_id)?;
        let base = format!("apps/{app_id}/metadata");
        self.client.get(&metadata_path(&base, path)).await
    }

    /// Replace the metadata value at a path.
    pub async fn update_metadata(&self, app_id: &str, path: &str, value: &Value) -> Result<Value> {
        require("App id", app_id)?;
        require("Metadata path", path)?;
        self.client
            .put(&format!("apps/{app_id}/metadata/{path}"), Some(value))
            .await
    }

    /// Merge into the metadata value at a path.
    pub async fn patch_metadata(&self, app_id: &str, path: &str, value: &Value) -> Result<Value> {
        require("App id", app_id)?;
        require("Metadata path", path)?;
        self.client
            .patch(&format!("apps/{app_id}/metadata/{path}"), Some(value))
            .await
    }

    /// Delete the metadata value at a path.
    pub async fn delete_metadata(&self, app_id: &str, path: &str) -> Result<Value> {
        require("App id", app_id)?;
        require("Metadata path", path)?;
        self.client
            .delete(&format!("apps/{app_id}/metadata/{path}"))
            .await
    }
}
