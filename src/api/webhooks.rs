//! Webhooks API.

use serde_json::Value;

use crate::client::ZapiClient;
use crate::error::Result;

use super::require;

/// API for webhook subscriptions.
pub struct WebhooksApi {
    client: ZapiClient,
}

impl WebhooksApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// List webhooks.
    pub async fn list(&self, options: Option<&Value>) -> Result<Value> {
        self.client.get_query("webhook", options).await
    }

    /// Create a webhook.
    pub async fn create(&self, data: &Value) -> Result<Value> {
        self.client.post("webhook", Some(data)).await
    }

    /// Get one webhook.
    pub async fn get(&self, webhook_id: &str) -> Result<Value> {
        require("Webhook id", webhook_id)?;
        self.client.get(&format!("webhook/{webhook_id}")).await
    }

    /// Update a webhook.
    pub async fn update(&self, webhook_id: &str, data: &Value) -> Result<Value> {
        require("Webhook id", webhook_id)?;
        self.client
            .put(&format!("webhook/{webhook_id}"), Some(data))
            .await
    }

    /// Delete a webhook.
    pub async fn delete(&self, webhook_id: &str) -> Result<Value> {
        require("Webhook id", webhook_id)?;
        self.client.delete(&format!("webhook/{webhook_id}")).await
    }

    /// Fire a test delivery.
    pub async fn test(&self, webhook_id: &str) -> Result<Value> {
        require("Webhook id", webhook_id)?;
        self.client
            .post(&format!("webhook/{webhook_id}/test"), None)
            .await
    }
}
