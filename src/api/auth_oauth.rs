//! OAuth authentication API.

use serde_json::{json, Value};

use crate::client::ZapiClient;
use crate::error::Result;

use super::{merge, metadata_path, require};

/// API for OAuth login flows (Google, Apple) and provider linking.
pub struct OauthApi {
    client: ZapiClient,
}

impl OauthApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// Start a Google OAuth login for an app.
    pub async fn initiate_google_login(
        &self,
        app_id: &str,
        options: Option<&Value>,
    ) -> Result<Value> {
        require("App id", app_id)?;
        let body = merge(json!({ "appId": app_id }), options);
        self.client
            .post("auth/oauth/google/initiate", Some(&body))
            .await
    }

    /// Start an Apple OAuth login for an app.
    pub async fn initiate_apple_login(
        &self,
        app_id: &str,
        options: Option<&Value>,
    ) -> Result<Value> {
        require("App id", app_id)?;
        let body = merge(json!({ "appId": app_id }), options);
        self.client
            .post("auth/oauth/apple/initiate", Some(&body))
            .await
    }

    /// Complete a Google OAuth login with the callback code and state.
    pub async fn handle_google_callback(
        &self,
        code: &str,
        state: &str,
        options: Option<&Value>,
    ) -> Result<Value> {
        require("Callback code", code)?;
        let body = merge(json!({ "code": code, "state": state }), options);
        self.client
            .post("auth/oauth/google/callback", Some(&body))
            .await
    }

    /// Complete an Apple OAuth login with the callback code and state.
    pub async fn handle_apple_callback(
        &self,
        code: &str,
        state: &str,
        options: Option<&Value>,
    ) -> Result<Value> {
        require("Callback code", code)?;
        let body = merge(json!({ "code": code, "state": state }), options);
        self.client
            .post("auth/oauth/apple/callback", Some(&body))
            .await
    }

    /// Link an OAuth provider account to the authenticated user.
    pub async fn link_account(
        &self,
        provider: &str,
        access_token: &str,
        options: Option<&Value>,
    ) -> Result<Value> {
        require("Provider", provider)?;
        require("Access token", access_token)?;
        let body = merge(json!({ "accessToken": access_token }), options);
        self.client
            .post(&format!("auth/oauth/{provider}/link"), Some(&body))
            .await
    }

    /// Unlink an OAuth provider account.
    pub async fn unlink_account(&self, provider: &str) -> Result<Value> {
        require("Provider", provider)?;
        self.client
            .post(&format!("auth/oauth/{provider}/unlink"), None)
            .await
    }

    /// Rendered success page for browser flows.
    pub async fn success_page(&self, options: Option<&Value>) -> Result<Value> {
        self.client.get_query("auth/oauth/success", options).await
    }

    /// Rendered error page for browser flows.
    pub async fn error_page(&self, options: Option<&Value>) -> Result<Value> {
        self.client.get_query("auth/oauth/error", options).await
    }

    /// Run a sandbox round trip against a provider.
    pub async fn sandbox_test(&self, provider: &str) -> Result<Value> {
        require("Provider", provider)?;
        self.client
            .get(&format!("auth/oauth/{provider}/sandbox-test"))
            .await
    }

    /// Server-side debug information for a provider.
    pub async fn debug_info(&self, provider: &str) -> Result<Value> {
        require("Provider", provider)?;
        self.client
            .get(&format!("auth/oauth/{provider}/debug"))
            .await
    }

    /// Read OAuth metadata for an app. An empty path returns the whole
    /// document.
    pub async fn get_metadata(&self, app_id: &str, path: &str) -> Result<Value> {
        require("App id", app_id)?;
        let base = format!("auth/oauth/{app_id}/metadata");
        self.client.get(&metadata_path(&base, path)).await
    }

    /// Replace the OAuth metadata value at a path.
    pub async fn update_metadata(&self, app_id: &str, path: &str, value: &Value) -> Result<Value> {
        require("App id", app_id)?;
        require("Metadata path", path)?;
        self.client
            .put(
                &format!("auth/oauth/{app_id}/metadata/{path}"),
                Some(&json!({ "value": value })),
            )
            .await
    }

    /// Merge into the OAuth metadata value at a path.
    pub async fn patch_metadata(&self, app_id: &str, path: &str, value: &Value) -> Result<Value> {
        require("App id", app_id)?;
        require("Metadata path", path)?;
        self.client
            .patch(
                &format!("auth/oauth/{app_id}/metadata/{path}"),
                Some(&json!({ "value": value })),
            )
            .await
    }

    /// Delete the OAuth metadata value at a path.
    pub async fn delete_metadata(&self, app_id: &str, path: &str) -> Result<Value> {
        require("App id", app_id)?;
        require("Metadata path", path)?;
        self.client
            .delete(&format!("auth/oauth/{app_id}/metadata/{path}"))
            .await
    }
}
