//! OAuth metadata API.

use serde_json::{json, Value};

use crate::client::ZapiClient;
use crate::error::Result;

use super::{metadata_path, require};

/// API for per-application OAuth metadata.
pub struct OauthMetadataApi {
    client: ZapiClient,
}

impl OauthMetadataApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// Read OAuth metadata. An empty `path` returns the whole document.
    pub async fn get(&self, app_id: &str, path: &str) -> Result<Value> {
        require("App id", app_id)?;
        self.client
            .get(&metadata_path(&format!("oauth-metadata/{app_id}"), path))
            .await
    }

    /// Replace the value at `path`.
    pub async fn update(&self, app_id: &str, path: &str, value: &Value) -> Result<Value> {
        require("App id", app_id)?;
        require("Metadata path", path)?;
        let body = json!({ "value": value });
        self.client
            .put(&format!("oauth-metadata/{app_id}/{path}"), Some(&body))
            .await
    }

    /// Partially update the value at `path`.
    pub async fn patch(&self, app_id: &str, path: &str, value: &Value) -> Result<Value> {
        require("App id", app_id)?;
        require("Metadata path", path)?;
        let body = json!({ "value": value });
        self.client
            .patch(&format!("oauth-metadata/{app_id}/{path}"), Some(&body))
            .await
    }

    /// Delete the value at `path`.
    pub async fn delete(&self, app_id: &str, path: &str) -> Result<Value> {
        require("App id", app_id)?;
        require("Metadata path", path)?;
        self.client
            .delete(&format!("oauth-metadata/{app_id}/{path}"))
            .await
    }
}
