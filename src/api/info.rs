//! Service info API.

use serde_json::Value;

use crate::client::ZapiClient;
use crate::error::Result;

/// API for platform health, metrics and status.
pub struct InfoApi {
    client: ZapiClient,
}

impl InfoApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// Platform health check.
    pub async fn health(&self) -> Result<Value> {
        self.client.get("info/health").await
    }

    /// Platform metrics.
    pub async fn metrics(&self) -> Result<Value> {
        self.client.get("info/metrics").await
    }

    /// Platform status summary.
    pub async fn status(&self) -> Result<Value> {
        self.client.get("info/status").await
    }

    /// Available AI models.
    pub async fn ai_models(&self) -> Result<Value> {
        self.client.get("info/aimodels").await
    }
}
