//! API key management API.

use serde_json::Value;

use crate::client::ZapiClient;
use crate::error::Result;

use super::require;

/// API for long-lived API keys.
pub struct ApiKeysApi {
    client: ZapiClient,
}

impl ApiKeysApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// List API keys.
    pub async fn list(&self, options: Option<&Value>) -> Result<Value> {
        self.client.get_query("api-keys", options).await
    }

    /// Create an API key.
    pub async fn create(&self, data: &Value) -> Result<Value> {
        self.client.post("api-keys", Some(data)).await
    }

    /// Get an API key by id.
    pub async fn get(&self, key_id: &str) -> Result<Value> {
        require("Key id", key_id)?;
        self.client.get(&format!("api-keys/{key_id}")).await
    }

    /// Update an API key.
    pub async fn update(&self, key_id: &str, data: &Value) -> Result<Value> {
        require("Key id", key_id)?;
        self.client
            .put(&format!("api-keys/{key_id}"), Some(data))
            .await
    }

    /// Delete an API key.
    pub async fn delete(&self, key_id: &str) -> Result<Value> {
        require("Key id", key_id)?;
        self.client.delete(&format!("api-keys/{key_id}")).await
    }

    /// Usage counters for one key.
    pub async fn usage(&self, key_id: &str) -> Result<Value> {
        require("Key id", key_id)?;
        self.client.get(&format!("api-keys/{key_id}/usage")).await
    }

    /// Roles assignable to API keys.
    pub async fn available_roles(&self) -> Result<Value> {
        self.client.get("api-keys/roles/available").await
    }

    /// Rotate a key, invalidating the old secret.
    pub async fn rotate(&self, key_id: &str) -> Result<Value> {
        require("Key id", key_id)?;
        self.client
            .post(&format!("api-keys/{key_id}/rotate"), None)
            .await
    }

    /// Look up a key record by its secret value.
    pub async fn lookup(&self, api_key: &str) -> Result<Value> {
        require("API key", api_key)?;
        self.client.get(&format!("api-keys/key/{api_key}")).await
    }
}
