//! User-defined functions API.

use serde_json::Value;

use crate::client::ZapiClient;
use crate::error::Result;

use super::{require, split_app_id};

/// API for user-defined functions.
pub struct FunctionsApi {
    client: ZapiClient,
}

impl FunctionsApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// List functions. An `appId` option is sent as an `x-app-id` header
    /// override instead of a query parameter.
    pub async fn list(&self, options: Option<&Value>) -> Result<Value> {
        let (query, headers) = split_app_id(options)?;
        self.client
            .get_with("functions", query.as_ref(), headers)
            .await
    }

    /// Create a function.
    pub async fn create(&self, data: &Value) -> Result<Value> {
        self.client.post("functions", Some(data)).await
    }

    /// Run a function against test input.
    pub async fn test(&self, function_id: &str, test_data: Option<&Value>) -> Result<Value> {
        require("Function id", function_id)?;
        self.client
            .post(&format!("functions/{function_id}/test"), test_data)
            .await
    }
}
