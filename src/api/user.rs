//! Current user API.

use serde_json::Value;

use crate::client::ZapiClient;
use crate::error::Result;

use super::{metadata_path, require};

/// API for the authenticated user's own profile, usage and history.
pub struct UserApi {
    client: ZapiClient,
}

impl UserApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// Get the user's profile.
    pub async fn get_profile(&self) -> Result<Value> {
        self.client.get("user/profile").await
    }

    /// Update the user's profile.
    pub async fn update_profile(&self, data: &Value) -> Result<Value> {
        self.client.put("user/profile", Some(data)).await
    }

    /// Get usage counters for the current billing window.
    pub async fn get_usage(&self) -> Result<Value> {
        self.client.get("user/usage").await
    }

    /// List the user's AI responses.
    pub async fn get_responses(&self, options: Option<&Value>) -> Result<Value> {
        self.client.get_query("user/responses", options).await
    }

    /// Get one AI response.
    pub async fn get_response(&self, response_id: &str) -> Result<Value> {
        require("Response id", response_id)?;
        self.client
            .get(&format!("user/responses/{response_id}"))
            .await
    }

    /// Delete one AI response.
    pub async fn delete_response(&self, response_id: &str) -> Result<Value> {
        require("Response id", response_id)?;
        self.client
            .delete(&format!("user/responses/{response_id}"))
            .await
    }

    /// Get the most recent AI response.
    pub async fn get_last_response(&self) -> Result<Value> {
        self.client.get("user/lastresponse").await
    }

    /// Delete the user's account.
    pub async fn delete_account(&self) -> Result<Value> {
        self.client.delete("user/account").await
    }

    /// Read user metadata. An empty path returns the whole document.
    pub async fn get_metadata(&self, path: &str) -> Result<Value> {
        self.client.get(&metadata_path("user/metadata", path)).await
    }

    /// Replace the metadata value at a path.
    pub async fn update_metadata(&self, path: &str, value: &Value) -> Result<Value> {
        require("Metadata path", path)?;
        self.client
            .put(&format!("user/metadata/{path}"), Some(value))
            .await
    }

    /// Merge into the metadata value at a path.
    pub async fn patch_metadata(&self, path: &str, value: &Value) -> Result<Value> {
        require("Metadata path", path)?;
        self.client
            .patch(&format!("user/metadata/{path}"), Some(value))
            .await
    }

    /// Delete the metadata value at a path.
    pub async fn delete_metadata(&self, path: &str) -> Result<Value> {
        require("Metadata path", path)?;
        self.client.delete(&format!("user/metadata/{path}")).await
    }

    /// List the user's conversations.
    pub async fn get_conversations(&self, options: Option<&Value>) -> Result<Value> {
        self.client.get_query("user/conversations", options).await
    }

    /// Get one conversation by response id.
    pub async fn get_conversation(&self, response_id: &str) -> Result<Value> {
        require("Response id", response_id)?;
        self.client
            .get(&format!("user/conversations/{response_id}"))
            .await
    }
}
