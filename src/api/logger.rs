//! Logger API.

use serde_json::Value;

use crate::client::ZapiClient;
use crate::error::Result;

/// API for the server-side logger itself.
pub struct LoggerApi {
    client: ZapiClient,
}

impl LoggerApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// Current logger configuration.
    pub async fn get(&self) -> Result<Value> {
        self.client.get("logger").await
    }

    /// Logger throughput statistics.
    pub async fn stats(&self) -> Result<Value> {
        self.client.get("logger/stats").await
    }
}
