//! Remote app configuration API.

use serde_json::Value;

use crate::client::ZapiClient;
use crate::error::Result;

/// API for the server-side configuration of the current app.
pub struct RemoteConfigApi {
    client: ZapiClient,
}

impl RemoteConfigApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// Fetch the app configuration.
    pub async fn get(&self) -> Result<Value> {
        self.client.get("config").await
    }
}
