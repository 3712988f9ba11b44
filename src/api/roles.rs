//! Roles API.

use serde_json::Value;

use crate::client::ZapiClient;
use crate::error::Result;

use super::require;

/// API for user roles and permissions.
pub struct RolesApi {
    client: ZapiClient,
}

impl RolesApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// List roles.
    pub async fn list(&self, options: Option<&Value>) -> Result<Value> {
        self.client.get_query("roles", options).await
    }

    /// Create a role.
    pub async fn create(&self, data: &Value) -> Result<Value> {
        self.client.post("roles", Some(data)).await
    }

    /// Get one role.
    pub async fn get(&self, role_id: &str) -> Result<Value> {
        require("Role id", role_id)?;
        self.client.get(&format!("roles/{role_id}")).await
    }

    /// Update a role.
    pub async fn update(&self, role_id: &str, data: &Value) -> Result<Value> {
        require("Role id", role_id)?;
        self.client.put(&format!("roles/{role_id}"), Some(data)).await
    }

    /// Delete a role.
    pub async fn delete(&self, role_id: &str) -> Result<Value> {
        require("Role id", role_id)?;
        self.client.delete(&format!("roles/{role_id}")).await
    }

    /// List users holding a role.
    pub async fn users(&self, role_id: &str, options: Option<&Value>) -> Result<Value> {
        require("Role id", role_id)?;
        self.client
            .get_query(&format!("roles/{role_id}/users"), options)
            .await
    }

    /// Permissions that can be granted to roles.
    pub async fn available_permissions(&self) -> Result<Value> {
        self.client.get("roles/permissions/available").await
    }

    /// Role assignment analytics.
    pub async fn analytics(&self) -> Result<Value> {
        self.client.get("roles/analytics").await
    }
}
