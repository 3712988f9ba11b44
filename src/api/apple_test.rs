//! Apple Sign-In test API.

use serde_json::Value;

use crate::client::ZapiClient;
use crate::error::Result;

/// API for exercising the Apple Sign-In integration.
pub struct AppleTestApi {
    client: ZapiClient,
}

impl AppleTestApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// Test page.
    pub async fn get(&self) -> Result<Value> {
        self.client.get("apple-test").await
    }

    /// Test page, alternate route.
    pub async fn get_test(&self) -> Result<Value> {
        self.client.get("apple-test/test").await
    }

    /// Set the Apple client configuration.
    pub async fn set_config(&self, data: &Value) -> Result<Value> {
        self.client.post("apple-test/config", Some(data)).await
    }

    /// Build an Apple authorization URL.
    pub async fn generate_url(&self, data: &Value) -> Result<Value> {
        self.client.post("apple-test/generate-url", Some(data)).await
    }

    /// Validate a client secret.
    pub async fn test_secret(&self, data: &Value) -> Result<Value> {
        self.client.post("apple-test/test-secret", Some(data)).await
    }

    /// Process an authorization callback.
    pub async fn handle_callback(&self, data: &Value) -> Result<Value> {
        self.client.post("apple-test/callback", Some(data)).await
    }

    /// Exchange an authorization code for tokens.
    pub async fn exchange_token(&self, data: &Value) -> Result<Value> {
        self.client.post("apple-test/exchange-token", Some(data)).await
    }
}
