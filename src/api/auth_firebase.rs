//! Firebase authentication API.

use serde_json::{json, Value};

use crate::client::ZapiClient;
use crate::error::Result;

use super::{merge, require, split_app_id};

/// API for Firebase-backed social sign-in.
pub struct FirebaseAuthApi {
    client: ZapiClient,
}

impl FirebaseAuthApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// Sign in with a Google-issued Firebase ID token.
    pub async fn login_with_google(
        &self,
        firebase_token: &str,
        options: Option<&Value>,
    ) -> Result<Value> {
        require("Firebase token", firebase_token)?;
        let base = json!({ "firebaseToken": firebase_token });
        let (body, headers) = split_app_id(Some(&merge(base, options)))?;
        self.client
            .post_with("auth/firebase/google", body.as_ref(), headers)
            .await
    }

    /// Sign in with an Apple-issued Firebase ID token.
    pub async fn login_with_apple(
        &self,
        firebase_token: &str,
        options: Option<&Value>,
    ) -> Result<Value> {
        require("Firebase token", firebase_token)?;
        let body = merge(json!({ "firebaseToken": firebase_token }), options);
        self.client.post("auth/firebase/apple", Some(&body)).await
    }

    /// Exchange a Firebase refresh token.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<Value> {
        require("Refresh token", refresh_token)?;
        self.client
            .post(
                "auth/firebase/refresh",
                Some(&json!({ "refreshToken": refresh_token })),
            )
            .await
    }

    /// Update the Firebase-linked profile.
    pub async fn update_profile(&self, data: &Value) -> Result<Value> {
        self.client.put("auth/firebase/profile", Some(data)).await
    }

    /// End the Firebase session.
    pub async fn logout(&self) -> Result<Value> {
        self.client.post("auth/firebase/logout", None).await
    }

    /// Firebase SDK status on the server.
    pub async fn sdk_status(&self) -> Result<Value> {
        self.client.get("auth/firebase/sdk-status").await
    }

    /// Server-side Firebase debug information.
    pub async fn debug_info(&self) -> Result<Value> {
        self.client.get("auth/firebase/debug").await
    }

    /// Firebase integration health check.
    pub async fn health(&self) -> Result<Value> {
        self.client.get("auth/firebase/health").await
    }

    /// Status of the authenticated Firebase user.
    pub async fn user_status(&self) -> Result<Value> {
        self.client.get("auth/firebase/user/status").await
    }
}
