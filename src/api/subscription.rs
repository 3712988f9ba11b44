//! Subscription API.

use serde_json::{json, Value};

use crate::client::ZapiClient;
use crate::error::Result;

/// API for the caller's own subscription.
pub struct SubscriptionApi {
    client: ZapiClient,
}

impl SubscriptionApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// Start a subscription.
    pub async fn create(&self, data: &Value) -> Result<Value> {
        self.client.post("subscription", Some(data)).await
    }

    /// Cancel the active subscription, with an optional reason.
    pub async fn cancel(&self, reason: &str) -> Result<Value> {
        let body = json!({ "reason": reason });
        self.client.post("subscription/cancel", Some(&body)).await
    }

    /// Renew the subscription.
    pub async fn renew(&self, data: Option<&Value>) -> Result<Value> {
        self.client.post("subscription/renew", data).await
    }

    /// Subscription usage analytics.
    pub async fn analytics(&self, options: Option<&Value>) -> Result<Value> {
        self.client.get_query("subscription/analytics", options).await
    }

    /// Current subscription details.
    pub async fn details(&self) -> Result<Value> {
        self.client.get("subscription/details").await
    }

    /// Check whether an upgrade is available.
    pub async fn check_upgrade(&self) -> Result<Value> {
        self.client.get("subscription/upgrade-check").await
    }
}
