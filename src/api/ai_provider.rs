//! AI provider management API.

use serde_json::{json, Value};

use crate::client::ZapiClient;
use crate::error::Result;

use super::{require, split_app_id};

/// API for AI providers and their model catalog.
pub struct AiProviderApi {
    client: ZapiClient,
}

impl AiProviderApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// List providers. An `appId` option becomes a per-call `x-app-id`
    /// override header.
    pub async fn list(&self, options: Option<&Value>) -> Result<Value> {
        let (query, headers) = split_app_id(options)?;
        self.client
            .get_with("ai-provider", query.as_ref(), headers)
            .await
    }

    /// Register a provider.
    pub async fn create(&self, data: &Value) -> Result<Value> {
        self.client.post("ai-provider/providers", Some(data)).await
    }

    /// Get a provider by id.
    pub async fn get(&self, provider_id: &str) -> Result<Value> {
        require("Provider id", provider_id)?;
        self.client
            .get(&format!("ai-provider/providers/{provider_id}"))
            .await
    }

    /// Update a provider.
    pub async fn update(&self, provider_id: &str, data: &Value) -> Result<Value> {
        require("Provider id", provider_id)?;
        self.client
            .put(&format!("ai-provider/providers/{provider_id}"), Some(data))
            .await
    }

    /// Delete a provider.
    pub async fn delete(&self, provider_id: &str) -> Result<Value> {
        require("Provider id", provider_id)?;
        self.client
            .delete(&format!("ai-provider/providers/{provider_id}"))
            .await
    }

    /// Run a connectivity test against a provider, optionally with an
    /// override API key.
    pub async fn test_provider(
        &self,
        provider_id: &str,
        override_key: Option<&str>,
    ) -> Result<Value> {
        require("Provider id", provider_id)?;
        let body = match override_key {
            Some(key) => json!({ "apiKey": key }),
            None => json!({}),
        };
        self.client
            .post(
                &format!("ai-provider/providers/{provider_id}/test"),
                Some(&body),
            )
            .await
    }

    /// List models.
    pub async fn models(&self, options: Option<&Value>) -> Result<Value> {
        self.client.get_query("ai-provider/models", options).await
    }

    /// Get a model by id.
    pub async fn model(&self, model_id: &str) -> Result<Value> {
        require("Model id", model_id)?;
        self.client
            .get(&format!("ai-provider/models/{model_id}"))
            .await
    }

    /// Register a model.
    pub async fn create_model(&self, data: &Value) -> Result<Value> {
        self.client.post("ai-provider/models", Some(data)).await
    }

    /// Update a model.
    pub async fn update_model(&self, model_id: &str, data: &Value) -> Result<Value> {
        require("Model id", model_id)?;
        self.client
            .put(&format!("ai-provider/models/{model_id}"), Some(data))
            .await
    }

    /// Delete a model.
    pub async fn delete_model(&self, model_id: &str) -> Result<Value> {
        require("Model id", model_id)?;
        self.client
            .delete(&format!("ai-provider/models/{model_id}"))
            .await
    }

    /// Run a connectivity test against a model.
    pub async fn test_model(&self, model_id: &str) -> Result<Value> {
        require("Model id", model_id)?;
        self.client
            .post(&format!("ai-provider/models/{model_id}/test"), None)
            .await
    }

    /// Default models, optionally for one category (e.g. `chat`,
    /// `embedding`).
    pub async fn default_models(&self, category: Option<&str>) -> Result<Value> {
        let path = match category {
            Some(category) if !category.is_empty() => {
                format!("ai-provider/models/default/{category}")
            }
            _ => "ai-provider/models/default".to_string(),
        };
        self.client.get(&path).await
    }

    /// Clear the provider-side model cache.
    pub async fn clear_cache(&self) -> Result<Value> {
        self.client.post("ai-provider/cache/clear", None).await
    }
}
