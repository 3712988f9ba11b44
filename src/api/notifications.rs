//! Notifications API.

use serde_json::Value;

use crate::client::ZapiClient;
use crate::error::Result;

use super::require;

/// API for e-mail and SMS notifications.
pub struct NotificationsApi {
    client: ZapiClient,
}

impl NotificationsApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// List notification logs.
    pub async fn list(&self, options: Option<&Value>) -> Result<Value> {
        self.client.get_query("notifications", options).await
    }

    /// Send a single e-mail.
    pub async fn send_email(&self, data: &Value) -> Result<Value> {
        self.client
            .post("notifications/email/send", Some(data))
            .await
    }

    /// Send a bulk e-mail batch.
    pub async fn send_bulk_email(&self, data: &Value) -> Result<Value> {
        self.client
            .post("notifications/email/send-bulk", Some(data))
            .await
    }

    /// Send a single SMS.
    pub async fn send_sms(&self, data: &Value) -> Result<Value> {
        self.client.post("notifications/sms/send", Some(data)).await
    }

    /// Send a bulk SMS batch.
    pub async fn send_bulk_sms(&self, data: &Value) -> Result<Value> {
        self.client
            .post("notifications/sms/send-bulk", Some(data))
            .await
    }

    /// Get one notification log entry.
    pub async fn get_log(&self, log_id: &str) -> Result<Value> {
        require("Log id", log_id)?;
        self.client.get(&format!("notifications/logs/{log_id}")).await
    }

    /// Delivery analytics.
    pub async fn analytics(&self, options: Option<&Value>) -> Result<Value> {
        self.client
            .get_query("notifications/analytics", options)
            .await
    }

    /// Retry a failed notification.
    pub async fn retry(&self, log_id: &str) -> Result<Value> {
        require("Log id", log_id)?;
        self.client
            .post(&format!("notifications/retry/{log_id}"), None)
            .await
    }

    /// Notification channel settings.
    pub async fn settings(&self) -> Result<Value> {
        self.client.get("notifications/settings").await
    }

    /// Update notification channel settings.
    pub async fn update_settings(&self, data: &Value) -> Result<Value> {
        self.client.put("notifications/settings", Some(data)).await
    }

    /// E-mail open tracking for one message.
    pub async fn track_email(&self, tracking_id: &str) -> Result<Value> {
        require("Tracking id", tracking_id)?;
        self.client
            .get(&format!("notifications/track/email/{tracking_id}"))
            .await
    }

    /// Delivery tracking for one notification.
    pub async fn track(&self, log_id: &str) -> Result<Value> {
        require("Log id", log_id)?;
        self.client
            .get(&format!("notifications/track/{log_id}"))
            .await
    }
}
