//! API endpoint implementations.
//!
//! Every group is a stateless newtype over [`ZapiClient`](crate::ZapiClient);
//! each method validates its required identifiers, substitutes them into a
//! static path template and delegates to the shared transport. Payloads and
//! results are pass-through JSON: the remote API is the source of truth for
//! their shape.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

use crate::error::{Error, Result};

mod admin;
mod ai_provider;
mod api_keys;
mod apple_test;
mod apps;
mod audio;
mod auth;
mod auth_firebase;
mod auth_oauth;
mod backup;
mod content;
mod debug;
mod docs;
mod embeddings;
mod functions;
mod images;
mod info;
mod logger;
mod logs;
mod mail_templates;
mod metadata;
mod notifications;
mod oauth_metadata;
mod plans;
mod realtime;
mod remote_config;
mod responses;
mod roles;
mod subscription;
mod system;
mod upload;
mod user;
mod users;
mod video;
mod webhooks;

pub use admin::AdminApi;
pub use ai_provider::AiProviderApi;
pub use api_keys::ApiKeysApi;
pub use apple_test::AppleTestApi;
pub use apps::AppsApi;
pub use audio::AudioApi;
pub use auth::{AuthApi, Identity};
pub use auth_firebase::FirebaseAuthApi;
pub use auth_oauth::OauthApi;
pub use backup::BackupApi;
pub use content::ContentApi;
pub use debug::DebugApi;
pub use docs::DocsApi;
pub use embeddings::EmbeddingsApi;
pub use functions::FunctionsApi;
pub use images::ImagesApi;
pub use info::InfoApi;
pub use logger::LoggerApi;
pub use logs::LogsApi;
pub use mail_templates::MailTemplatesApi;
pub use metadata::MetadataApi;
pub use notifications::NotificationsApi;
pub use oauth_metadata::OauthMetadataApi;
pub use plans::PlansApi;
pub use realtime::RealtimeApi;
pub use remote_config::RemoteConfigApi;
pub use responses::ResponsesApi;
pub use roles::RolesApi;
pub use subscription::SubscriptionApi;
pub use system::SystemApi;
pub use upload::UploadApi;
pub use user::UserApi;
pub use users::UsersApi;
pub use video::VideoApi;
pub use webhooks::WebhooksApi;

/// Fail with a Validation error when a required identifier is empty.
///
/// Runs before any network I/O.
pub(crate) fn require(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(Error::validation(format!("{name} must not be empty")))
    } else {
        Ok(())
    }
}

/// Merge caller options over a base object. Option keys win.
pub(crate) fn merge(mut base: Value, options: Option<&Value>) -> Value {
    if let (Value::Object(base_map), Some(Value::Object(extra))) = (&mut base, options) {
        for (key, value) in extra {
            base_map.insert(key.clone(), value.clone());
        }
    }
    base
}

/// Join a metadata path onto its base endpoint. An empty path addresses the
/// whole metadata document.
pub(crate) fn metadata_path(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{path}")
    }
}

/// Hoist an `appId` option into an `x-app-id` override header, removing it
/// from the payload. Operations that accept a per-call tenant override use
/// this before sending.
pub(crate) fn split_app_id(options: Option<&Value>) -> Result<(Option<Value>, HeaderMap)> {
    let mut headers = HeaderMap::new();
    let Some(Value::Object(map)) = options else {
        return Ok((options.cloned(), headers));
    };

    let mut map = map.clone();
    if let Some(app_id) = map.remove("appId") {
        let raw = match &app_id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        let value = HeaderValue::from_str(&raw)
            .map_err(|_| Error::validation("appId contains invalid header characters"))?;
        headers.insert(HeaderName::from_static("x-app-id"), value);
    }
    Ok((Some(Value::Object(map)), headers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn require_rejects_empty_and_blank() {
        assert!(require("App id", "").is_err());
        assert!(require("App id", "  ").is_err());
        assert!(require("App id", "app_123").is_ok());

        let err = require("Response id", "").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.message(), "Response id must not be empty");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn merge_lets_options_win() {
        let merged = merge(
            json!({"model": "default", "input": "hi"}),
            Some(&json!({"model": "custom", "user": "u1"})),
        );
        assert_eq!(merged["model"], "custom");
        assert_eq!(merged["input"], "hi");
        assert_eq!(merged["user"], "u1");
    }

    #[test]
    fn metadata_path_handles_empty_and_nested() {
        assert_eq!(metadata_path("user/metadata", ""), "user/metadata");
        assert_eq!(
            metadata_path("user/metadata", "preferences/theme"),
            "user/metadata/preferences/theme"
        );
        assert_eq!(metadata_path("user/metadata", "/prefs"), "user/metadata/prefs");
    }

    #[test]
    fn split_app_id_hoists_header() {
        let (body, headers) =
            split_app_id(Some(&json!({"appId": "app_42", "page": 1}))).unwrap();
        assert_eq!(headers.get("x-app-id").unwrap(), "app_42");
        let body = body.unwrap();
        assert!(body.get("appId").is_none());
        assert_eq!(body["page"], 1);

        let (_, headers) = split_app_id(Some(&json!({"page": 1}))).unwrap();
        assert!(headers.is_empty());
    }
}
