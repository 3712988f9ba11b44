//! Logs API.

use serde_json::Value;

use crate::client::ZapiClient;
use crate::error::Result;

use super::require;

/// API for request/activity logs.
pub struct LogsApi {
    client: ZapiClient,
}

impl LogsApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// List log entries.
    pub async fn list(&self, options: Option<&Value>) -> Result<Value> {
        self.client.get_query("logs", options).await
    }

    /// Get one log entry.
    pub async fn get(&self, log_id: &str) -> Result<Value> {
        require("Log id", log_id)?;
        self.client.get(&format!("logs/{log_id}")).await
    }

    /// Log volume statistics.
    pub async fn stats(&self) -> Result<Value> {
        self.client.get("logs/stats").await
    }

    /// Delete old entries matching the given filters.
    pub async fn cleanup(&self, options: Option<&Value>) -> Result<Value> {
        self.client.delete_query("logs/cleanup", options).await
    }

    /// Delete all log entries.
    pub async fn clear(&self) -> Result<Value> {
        self.client.delete("logs/clear").await
    }
}
