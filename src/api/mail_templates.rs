//! Mail templates API.

use serde_json::{json, Value};

use crate::client::ZapiClient;
use crate::error::Result;

use super::require;

/// API for transactional e-mail templates.
pub struct MailTemplatesApi {
    client: ZapiClient,
}

impl MailTemplatesApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// List templates.
    pub async fn list(&self, options: Option<&Value>) -> Result<Value> {
        self.client.get_query("mail-templates", options).await
    }

    /// Create a template.
    pub async fn create(&self, data: &Value) -> Result<Value> {
        self.client.post("mail-templates", Some(data)).await
    }

    /// Get one template.
    pub async fn get(&self, template_id: &str) -> Result<Value> {
        require("Template id", template_id)?;
        self.client
            .get(&format!("mail-templates/{template_id}"))
            .await
    }

    /// Update a template.
    pub async fn update(&self, template_id: &str, data: &Value) -> Result<Value> {
        require("Template id", template_id)?;
        self.client
            .put(&format!("mail-templates/{template_id}"), Some(data))
            .await
    }

    /// Delete a template.
    pub async fn delete(&self, template_id: &str) -> Result<Value> {
        require("Template id", template_id)?;
        self.client
            .delete(&format!("mail-templates/{template_id}"))
            .await
    }

    /// Flip a template between active and inactive.
    pub async fn toggle_status(&self, template_id: &str) -> Result<Value> {
        require("Template id", template_id)?;
        self.client
            .patch(&format!("mail-templates/{template_id}/toggle-status"), None)
            .await
    }

    /// Render a template with the given variables.
    pub async fn preview(&self, template_id: &str, variables: &Value) -> Result<Value> {
        require("Template id", template_id)?;
        let body = json!({ "variables": variables });
        self.client
            .post(&format!("mail-templates/{template_id}/preview"), Some(&body))
            .await
    }

    /// Clone a template.
    pub async fn clone(&self, template_id: &str, data: Option<&Value>) -> Result<Value> {
        require("Template id", template_id)?;
        self.client
            .post(&format!("mail-templates/{template_id}/clone"), data)
            .await
    }
}
