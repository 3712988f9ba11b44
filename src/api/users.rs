//! User administration API.

use serde_json::{json, Value};

use crate::client::ZapiClient;
use crate::error::Result;

use super::{metadata_path, require};

/// Admin-scoped API over all users of an app.
pub struct UsersApi {
    client: ZapiClient,
}

impl UsersApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// List users.
    pub async fn list(&self, options: Option<&Value>) -> Result<Value> {
        self.client.get_query("users", options).await
    }

    /// Aggregate user statistics.
    pub async fn stats(&self) -> Result<Value> {
        self.client.get("users/stats").await
    }

    /// Get a user by id.
    pub async fn get(&self, user_id: &str) -> Result<Value> {
        require("User id", user_id)?;
        self.client.get(&format!("users/{user_id}")).await
    }

    /// Update a user.
    pub async fn update(&self, user_id: &str, data: &Value) -> Result<Value> {
        require("User id", user_id)?;
        self.client.put(&format!("users/{user_id}"), Some(data)).await
    }

    /// Delete a user.
    pub async fn delete(&self, user_id: &str) -> Result<Value> {
        require("User id", user_id)?;
        self.client.delete(&format!("users/{user_id}")).await
    }

    /// Read a user's metadata. An empty path returns the whole document.
    pub async fn get_metadata(&self, user_id: &str, path: &str) -> Result<Value> {
        require("User id", user_id)?;
        let base = format!("users/{user_id}/metadata");
        self.client.get(&metadata_path(&base, path)).await
    }

    /// Replace a user's metadata value at a path.
    pub async fn update_metadata(&self, user_id: &str, path: &str, value: &Value) -> Result<Value> {
        require("User id", user_id)?;
        require("Metadata path", path)?;
        self.client
            .put(
                &format!("users/{user_id}/metadata/{path}"),
                Some(&json!({ "value": value })),
            )
            .await
    }

    /// Delete a user's metadata value at a path.
    pub async fn delete_metadata(&self, user_id: &str, path: &str) -> Result<Value> {
        require("User id", user_id)?;
        require("Metadata path", path)?;
        self.client
            .delete(&format!("users/{user_id}/metadata/{path}"))
            .await
    }
}
