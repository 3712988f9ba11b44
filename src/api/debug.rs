//! Debug API.

use serde_json::Value;

use crate::client::ZapiClient;
use crate::error::Result;

/// API for server-side debug introspection.
pub struct DebugApi {
    client: ZapiClient,
}

impl DebugApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// Loaded model registry.
    pub async fn models(&self) -> Result<Value> {
        self.client.get("debug/models").await
    }

    /// Provider manager state.
    pub async fn provider_manager(&self) -> Result<Value> {
        self.client.get("debug/provider-manager").await
    }
}
