//! System administration API.

use serde_json::Value;

use crate::client::ZapiClient;
use crate::error::Result;

/// API for low-level system operations. Admin only.
pub struct SystemApi {
    client: ZapiClient,
}

impl SystemApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// Restart the backend service.
    pub async fn restart(&self) -> Result<Value> {
        self.client.post("system/restart", None).await
    }

    /// Service status.
    pub async fn status(&self) -> Result<Value> {
        self.client.get("system/status").await
    }

    /// Memory usage snapshot.
    pub async fn memory(&self) -> Result<Value> {
        self.client.get("system/memory").await
    }
}
