//! Subscription plans API.

use serde_json::{json, Value};

use crate::client::ZapiClient;
use crate::error::Result;

use super::{metadata_path, require};

/// API for subscription plans.
pub struct PlansApi {
    client: ZapiClient,
}

impl PlansApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// List plans. Public endpoint.
    pub async fn list(&self, options: Option<&Value>) -> Result<Value> {
        self.client.get_query("plans", options).await
    }

    /// Compare a set of plans side by side. Public endpoint.
    pub async fn compare(&self, plan_ids: &[&str]) -> Result<Value> {
        // Query values must be flat; the server accepts a comma-joined list.
        let query = json!({ "plans": plan_ids.join(",") });
        self.client.get_query("plans/compare", Some(&query)).await
    }

    /// Create a plan. Admin only.
    pub async fn create(&self, data: &Value) -> Result<Value> {
        self.client.post("plans", Some(data)).await
    }

    /// Get one plan.
    pub async fn get(&self, plan_id: &str) -> Result<Value> {
        require("Plan id", plan_id)?;
        self.client.get(&format!("plans/{plan_id}")).await
    }

    /// Update a plan. Admin only.
    pub async fn update(&self, plan_id: &str, data: &Value) -> Result<Value> {
        require("Plan id", plan_id)?;
        self.client.put(&format!("plans/{plan_id}"), Some(data)).await
    }

    /// Delete a plan. Admin only.
    pub async fn delete(&self, plan_id: &str) -> Result<Value> {
        require("Plan id", plan_id)?;
        self.client.delete(&format!("plans/{plan_id}")).await
    }

    /// Flip a plan between active and inactive. Admin only.
    pub async fn toggle_status(&self, plan_id: &str) -> Result<Value> {
        require("Plan id", plan_id)?;
        self.client
            .patch(&format!("plans/{plan_id}/toggle-status"), None)
            .await
    }

    /// List subscribers of a plan. Admin only.
    pub async fn subscribers(&self, plan_id: &str, options: Option<&Value>) -> Result<Value> {
        require("Plan id", plan_id)?;
        self.client
            .get_query(&format!("plans/subscribers/{plan_id}"), options)
            .await
    }

    /// Plan usage analytics. Admin only.
    pub async fn analytics(&self, plan_id: &str, options: Option<&Value>) -> Result<Value> {
        require("Plan id", plan_id)?;
        self.client
            .get_query(&format!("plans/analytics/{plan_id}"), options)
            .await
    }

    /// Read plan metadata. An empty `path` returns the whole document.
    pub async fn get_metadata(&self, plan_id: &str, path: &str) -> Result<Value> {
        require("Plan id", plan_id)?;
        self.client
            .get(&metadata_path(&format!("plans/{plan_id}/metadata"), path))
            .await
    }

    /// Replace the metadata value at `path`.
    pub async fn update_metadata(&self, plan_id: &str, path: &str, value: &Value) -> Result<Value> {
        require("Plan id", plan_id)?;
        require("Metadata path", path)?;
        let body = json!({ "value": value });
        self.client
            .put(&format!("plans/{plan_id}/metadata/{path}"), Some(&body))
            .await
    }

    /// Partially update the metadata value at `path`.
    pub async fn patch_metadata(&self, plan_id: &str, path: &str, value: &Value) -> Result<Value> {
        require("Plan id", plan_id)?;
        require("Metadata path", path)?;
        let body = json!({ "value": value });
        self.client
            .patch(&format!("plans/{plan_id}/metadata/{path}"), Some(&body))
            .await
    }

    /// Delete the metadata value at `path`.
    pub async fn delete_metadata(&self, plan_id: &str, path: &str) -> Result<Value> {
        require("Plan id", plan_id)?;
        require("Metadata path", path)?;
        self.client
            .delete(&format!("plans/{plan_id}/metadata/{path}"))
            .await
    }
}
