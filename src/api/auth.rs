//! Authentication API.

use serde_json::{json, Value};

use crate::client::ZapiClient;
use crate::error::Result;

use super::{merge, require, split_app_id};

/// Email-or-phone identity used by the login and verification flows.
///
/// The remote API accepts either an `email` or a `phone` field; exactly one
/// applies per call.
#[derive(Debug, Clone, Copy)]
pub enum Identity<'a> {
    /// Identify the account by email address.
    Email(&'a str),
    /// Identify the account by phone number.
    Phone(&'a str),
}

impl Identity<'_> {
    fn field(&self) -> &'static str {
        match self {
            Identity::Email(_) => "email",
            Identity::Phone(_) => "phone",
        }
    }

    fn value(&self) -> &str {
        match self {
            Identity::Email(v) | Identity::Phone(v) => v,
        }
    }
}

/// Authentication API client.
pub struct AuthApi {
    client: ZapiClient,
}

impl AuthApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// Register a new account. An `appId` key in `data` becomes a per-call
    /// `x-app-id` override header.
    pub async fn register(&self, data: &Value) -> Result<Value> {
        let (body, headers) = split_app_id(Some(data))?;
        self.client
            .post_with("auth/register", body.as_ref(), headers)
            .await
    }

    /// Log in with an email or phone identity.
    ///
    /// On success the response carries a bearer token; pass it to
    /// [`ZapiClient::set_bearer_token`] to authenticate subsequent calls.
    pub async fn login(
        &self,
        identity: Identity<'_>,
        password: &str,
        options: Option<&Value>,
    ) -> Result<Value> {
        require("Login identity", identity.value())?;
        let base = json!({
            identity.field(): identity.value(),
            "password": password,
        });
        let (body, headers) = split_app_id(Some(&merge(base, options)))?;
        self.client
            .post_with("auth/login", body.as_ref(), headers)
            .await
    }

    /// Log in with an email address.
    pub async fn login_with_email(
        &self,
        email: &str,
        password: &str,
        options: Option<&Value>,
    ) -> Result<Value> {
        self.login(Identity::Email(email), password, options).await
    }

    /// Log in with a phone number.
    pub async fn login_with_phone(
        &self,
        phone: &str,
        password: &str,
        options: Option<&Value>,
    ) -> Result<Value> {
        self.login(Identity::Phone(phone), password, options).await
    }

    /// Send a verification code of the given type (e.g. `email`, `sms`).
    pub async fn send_verification(&self, identity: Identity<'_>, kind: &str) -> Result<Value> {
        require("Verification identity", identity.value())?;
        let body = json!({
            identity.field(): identity.value(),
            "type": kind,
        });
        self.client
            .post("auth/send-verification", Some(&body))
            .await
    }

    /// Verify an email address with the token from the verification mail.
    pub async fn verify_email(&self, token: &str) -> Result<Value> {
        require("Verification token", token)?;
        self.client
            .post("auth/verify-email", Some(&json!({ "token": token })))
            .await
    }

    /// Verify a code sent to the given identity.
    pub async fn verify(&self, identity: Identity<'_>, code: &str, kind: &str) -> Result<Value> {
        require("Verification identity", identity.value())?;
        require("Verification code", code)?;
        let body = json!({
            identity.field(): identity.value(),
            "code": code,
            "type": kind,
        });
        self.client.post("auth/verify", Some(&body)).await
    }

    /// Request a password reset for the given identity.
    pub async fn forgot_password(&self, identity: Identity<'_>) -> Result<Value> {
        require("Reset identity", identity.value())?;
        let body = json!({ identity.field(): identity.value() });
        self.client.post("auth/forgot-password", Some(&body)).await
    }

    /// Complete a password reset with the emailed code.
    pub async fn reset_password(&self, code: &str, new_password: &str) -> Result<Value> {
        require("Reset code", code)?;
        let body = json!({
            "code": code,
            "newPassword": new_password,
        });
        self.client.post("auth/reset-password", Some(&body)).await
    }

    /// Send a one-time password to the given identity.
    ///
    /// Recognized options: `phonePrefix` (defaults to `"90"` for phone
    /// identities), `firstName`, `lastName`, `name`, `surname`, and `appId`
    /// (hoisted to an `x-app-id` header).
    pub async fn send_otp(&self, identity: Identity<'_>, options: Option<&Value>) -> Result<Value> {
        require("OTP identity", identity.value())?;
        let base = match identity {
            Identity::Email(mail) => json!({ "mail": mail }),
            Identity::Phone(phone) => json!({ "phone": phone, "phonePrefix": "90" }),
        };
        let (body, headers) = split_app_id(Some(&merge(base, options)))?;
        self.client
            .post_with("auth/otp", body.as_ref(), headers)
            .await
    }

    /// Verify a one-time password.
    ///
    /// Recognized options: `phonePrefix` for phone identities.
    pub async fn verify_otp(
        &self,
        identity: Identity<'_>,
        code: &str,
        options: Option<&Value>,
    ) -> Result<Value> {
        require("OTP identity", identity.value())?;
        require("OTP code", code)?;
        let base = json!({
            identity.field(): identity.value(),
            "otpCode": code,
        });
        let body = merge(base, options);
        self.client.post("auth/otp-verify", Some(&body)).await
    }

    /// Get the authenticated user's profile.
    pub async fn get_profile(&self) -> Result<Value> {
        self.client.get("auth/profile").await
    }

    /// Update the authenticated user's profile.
    pub async fn update_profile(&self, data: &Value) -> Result<Value> {
        self.client.put("auth/profile", Some(data)).await
    }

    /// End the current session.
    pub async fn logout(&self) -> Result<Value> {
        self.client.get("auth/logout").await
    }

    /// Validate a JWT and return its details.
    pub async fn verify_token(&self, token: &str) -> Result<Value> {
        require("Token", token)?;
        self.client
            .post("auth/verify-token", Some(&json!({ "token": token })))
            .await
    }

    /// Change the password of the authenticated user.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<Value> {
        let body = json!({
            "currentPassword": current_password,
            "newPassword": new_password,
        });
        self.client.post("auth/change-password", Some(&body)).await
    }

    /// Exchange a refresh token for a fresh bearer token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<Value> {
        require("Refresh token", refresh_token)?;
        let body = json!({ "refreshToken": refresh_token });
        self.client.post("auth/refresh", Some(&body)).await
    }

    /// Auth service health check.
    pub async fn health(&self) -> Result<Value> {
        self.client.get("auth/health").await
    }
}
