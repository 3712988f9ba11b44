//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, RwLock};
use reqwest::header::HeaderMap;
use reqwest::Method;
use serde_json::{json, Value};

use crate::api::{
    AdminApi, AiProviderApi, ApiKeysApi, AppleTestApi, AppsApi, AudioApi, AuthApi, BackupApi,
    ContentApi, DebugApi, DocsApi, EmbeddingsApi, FirebaseAuthApi, FunctionsApi, ImagesApi,
    InfoApi, LoggerApi, LogsApi, MailTemplatesApi, MetadataApi, NotificationsApi, OauthApi,
    OauthMetadataApi, PlansApi, RealtimeApi, RemoteConfigApi, ResponsesApi, RolesApi,
    SubscriptionApi, SystemApi, UploadApi, UserApi, UsersApi, VideoApi, WebhooksApi,
};
use crate::config::{ClientConfig, DEFAULT_TIMEOUT};
use crate::error::{Error, Result};
use crate::transport::{FileSource, RequestOptions, Transport};

/// ZAPI client.
///
/// Provides typed access to every ZAPI endpoint group. The client is a cheap
/// cloneable handle; clones share configuration and the cached transport.
///
/// Configuration setters take effect on the next request: the cached
/// transport is dropped and rebuilt from the new snapshot, while requests
/// already in flight keep the transport they started with. Setters are
/// memory-safe to call from any thread, but the ordering between a setter and
/// concurrently issued requests is the caller's to arrange.
///
/// # Example
///
/// ```no_run
/// use zapi_client::ZapiClient;
///
/// # async fn example() -> zapi_client::Result<()> {
/// let client = ZapiClient::new("your_api_key", "app_1234567890")?;
///
/// let login = client.auth().login_with_email("user@example.com", "pw", None).await?;
/// if let Some(token) = login.get("token").and_then(|t| t.as_str()) {
///     client.set_bearer_token(token);
/// }
///
/// let profile = client.user().get_profile().await?;
/// println!("{profile}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ZapiClient {
    inner: Arc<Inner>,
}

/// Shared state: the current config snapshot plus the single-slot transport
/// cache that every setter clears.
struct Inner {
    config: RwLock<Arc<ClientConfig>>,
    transport: Mutex<Option<Arc<Transport>>>,
}

impl ZapiClient {
    /// Create a client with the default base URL and options.
    ///
    /// Fails if `api_key` or `app_id` is empty.
    pub fn new(api_key: impl Into<String>, app_id: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).app_id(app_id).build()
    }

    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// SDK version string.
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Configuration
    // ─────────────────────────────────────────────────────────────────────────

    fn update_config(&self, apply: impl FnOnce(&mut ClientConfig)) {
        let mut guard = self.inner.config.write();
        let mut config = (**guard).clone();
        apply(&mut config);
        *guard = Arc::new(config);
        // Invalidate the cached transport; the next call rebuilds it.
        *self.inner.transport.lock() = None;
    }

    fn config(&self) -> Arc<ClientConfig> {
        self.inner.config.read().clone()
    }

    /// Replace the API key.
    pub fn set_api_key(&self, api_key: impl Into<String>) -> &Self {
        self.update_config(|c| c.api_key = api_key.into());
        self
    }

    /// Replace the app id.
    pub fn set_app_id(&self, app_id: impl Into<String>) -> &Self {
        self.update_config(|c| c.app_id = app_id.into());
        self
    }

    /// Replace the base URL.
    pub fn set_base_url(&self, base_url: impl Into<String>) -> &Self {
        self.update_config(|c| c.base_url = base_url.into().trim_end_matches('/').to_string());
        self
    }

    /// Set the bearer token sent as `Authorization: Bearer <token>`.
    pub fn set_bearer_token(&self, token: impl Into<String>) -> &Self {
        self.update_config(|c| c.bearer_token = Some(token.into()));
        self
    }

    /// Clear the bearer token.
    pub fn clear_bearer_token(&self) -> &Self {
        self.update_config(|c| c.bearer_token = None);
        self
    }

    /// Set the request timeout.
    pub fn set_timeout(&self, timeout: Duration) -> &Self {
        self.update_config(|c| c.timeout = timeout);
        self
    }

    /// Toggle connection-level debug output.
    pub fn set_debug(&self, debug: bool) -> &Self {
        self.update_config(|c| c.debug = debug);
        self
    }

    /// Current API key.
    pub fn api_key(&self) -> String {
        self.config().api_key.clone()
    }

    /// Current app id.
    pub fn app_id(&self) -> String {
        self.config().app_id.clone()
    }

    /// Current base URL.
    pub fn base_url(&self) -> String {
        self.config().base_url.clone()
    }

    /// Current bearer token, if set.
    pub fn bearer_token(&self) -> Option<String> {
        self.config().bearer_token.clone()
    }

    /// Current request timeout.
    pub fn timeout(&self) -> Duration {
        self.config().timeout
    }

    /// Whether debug mode is on.
    pub fn debug(&self) -> bool {
        self.config().debug
    }

    /// Summary of the client configuration and available endpoint groups.
    pub fn info(&self) -> Value {
        let config = self.config();
        json!({
            "version": Self::version(),
            "baseUrl": config.base_url,
            "appId": config.app_id,
            "debug": config.debug,
            "timeout": config.timeout.as_secs(),
            "endpoints": [
                "auth", "user", "users", "admin", "apps", "ai_provider",
                "api_keys", "audio", "auth_firebase", "auth_oauth", "backup",
                "remote_config", "content", "debug", "docs", "embeddings",
                "images", "info", "logs", "mail_templates", "notifications",
                "plans", "realtime", "roles", "subscription", "system",
                "upload", "responses", "webhooks", "functions",
                "oauth_metadata", "metadata", "video", "logger", "apple_test",
            ],
        })
    }

    /// Cached transport, built lazily from the current config snapshot.
    pub(crate) fn transport(&self) -> Result<Arc<Transport>> {
        let mut slot = self.inner.transport.lock();
        if let Some(transport) = slot.as_ref() {
            return Ok(transport.clone());
        }
        let transport = Arc::new(Transport::new(&self.config())?);
        *slot = Some(transport.clone());
        Ok(transport)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the authentication API.
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.clone())
    }

    /// Access the current user's profile API.
    pub fn user(&self) -> UserApi {
        UserApi::new(self.clone())
    }

    /// Access the user administration API.
    pub fn users(&self) -> UsersApi {
        UsersApi::new(self.clone())
    }

    /// Access the admin/ops API.
    pub fn admin(&self) -> AdminApi {
        AdminApi::new(self.clone())
    }

    /// Access the apps API.
    pub fn apps(&self) -> AppsApi {
        AppsApi::new(self.clone())
    }

    /// Access the AI provider management API.
    pub fn ai_provider(&self) -> AiProviderApi {
        AiProviderApi::new(self.clone())
    }

    /// Access the API key management API.
    pub fn api_keys(&self) -> ApiKeysApi {
        ApiKeysApi::new(self.clone())
    }

    /// Access the audio API.
    pub fn audio(&self) -> AudioApi {
        AudioApi::new(self.clone())
    }

    /// Access the Firebase authentication API.
    pub fn auth_firebase(&self) -> FirebaseAuthApi {
        FirebaseAuthApi::new(self.clone())
    }

    /// Access the OAuth authentication API.
    pub fn auth_oauth(&self) -> OauthApi {
        OauthApi::new(self.clone())
    }

    /// Access the backup API.
    pub fn backup(&self) -> BackupApi {
        BackupApi::new(self.clone())
    }

    /// Access the remote app configuration API.
    pub fn remote_config(&self) -> RemoteConfigApi {
        RemoteConfigApi::new(self.clone())
    }

    /// Access the content API.
    pub fn content(&self) -> ContentApi {
        ContentApi::new(self.clone())
    }

    /// Access the debug API.
    pub fn debug_api(&self) -> DebugApi {
        DebugApi::new(self.clone())
    }

    /// Access the docs API.
    pub fn docs(&self) -> DocsApi {
        DocsApi::new(self.clone())
    }

    /// Access the embeddings API.
    pub fn embeddings(&self) -> EmbeddingsApi {
        EmbeddingsApi::new(self.clone())
    }

    /// Access the image generation API.
    pub fn images(&self) -> ImagesApi {
        ImagesApi::new(self.clone())
    }

    /// Access the service info API.
    pub fn service_info(&self) -> InfoApi {
        InfoApi::new(self.clone())
    }

    /// Access the logs API.
    pub fn logs(&self) -> LogsApi {
        LogsApi::new(self.clone())
    }

    /// Access the mail templates API.
    pub fn mail_templates(&self) -> MailTemplatesApi {
        MailTemplatesApi::new(self.clone())
    }

    /// Access the notifications API.
    pub fn notifications(&self) -> NotificationsApi {
        NotificationsApi::new(self.clone())
    }

    /// Access the plans API.
    pub fn plans(&self) -> PlansApi {
        PlansApi::new(self.clone())
    }

    /// Access the realtime sessions API.
    pub fn realtime(&self) -> RealtimeApi {
        RealtimeApi::new(self.clone())
    }

    /// Access the roles API.
    pub fn roles(&self) -> RolesApi {
        RolesApi::new(self.clone())
    }

    /// Access the subscription API.
    pub fn subscription(&self) -> SubscriptionApi {
        SubscriptionApi::new(self.clone())
    }

    /// Access the system API.
    pub fn system(&self) -> SystemApi {
        SystemApi::new(self.clone())
    }

    /// Access the upload API.
    pub fn upload(&self) -> UploadApi {
        UploadApi::new(self.clone())
    }

    /// Access the AI responses API.
    pub fn responses(&self) -> ResponsesApi {
        ResponsesApi::new(self.clone())
    }

    /// Access the webhooks API.
    pub fn webhooks(&self) -> WebhooksApi {
        WebhooksApi::new(self.clone())
    }

    /// Access the functions API.
    pub fn functions(&self) -> FunctionsApi {
        FunctionsApi::new(self.clone())
    }

    /// Access the OAuth metadata API.
    pub fn oauth_metadata(&self) -> OauthMetadataApi {
        OauthMetadataApi::new(self.clone())
    }

    /// Access the generic metadata API.
    pub fn metadata(&self) -> MetadataApi {
        MetadataApi::new(self.clone())
    }

    /// Access the video API.
    pub fn video(&self) -> VideoApi {
        VideoApi::new(self.clone())
    }

    /// Access the logger API.
    pub fn logger(&self) -> LoggerApi {
        LoggerApi::new(self.clone())
    }

    /// Access the Apple sign-in test API.
    pub fn apple_test(&self) -> AppleTestApi {
        AppleTestApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    pub(crate) async fn get(&self, path: &str) -> Result<Value> {
        self.transport()?
            .request(Method::GET, path, RequestOptions::default())
            .await
    }

    pub(crate) async fn get_query(&self, path: &str, query: Option<&Value>) -> Result<Value> {
        self.transport()?
            .request(
                Method::GET,
                path,
                RequestOptions {
                    query,
                    ..Default::default()
                },
            )
            .await
    }

    pub(crate) async fn get_with(
        &self,
        path: &str,
        query: Option<&Value>,
        headers: HeaderMap,
    ) -> Result<Value> {
        self.transport()?
            .request(
                Method::GET,
                path,
                RequestOptions {
                    query,
                    headers: Some(headers),
                    ..Default::default()
                },
            )
            .await
    }

    pub(crate) async fn post(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.transport()?
            .request(
                Method::POST,
                path,
                RequestOptions {
                    body,
                    ..Default::default()
                },
            )
            .await
    }

    pub(crate) async fn post_with(
        &self,
        path: &str,
        body: Option<&Value>,
        headers: HeaderMap,
    ) -> Result<Value> {
        self.transport()?
            .request(
                Method::POST,
                path,
                RequestOptions {
                    body,
                    headers: Some(headers),
                    ..Default::default()
                },
            )
            .await
    }

    pub(crate) async fn put(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.transport()?
            .request(
                Method::PUT,
                path,
                RequestOptions {
                    body,
                    ..Default::default()
                },
            )
            .await
    }

    pub(crate) async fn patch(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.transport()?
            .request(
                Method::PATCH,
                path,
                RequestOptions {
                    body,
                    ..Default::default()
                },
            )
            .await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<Value> {
        self.transport()?
            .request(Method::DELETE, path, RequestOptions::default())
            .await
    }

    pub(crate) async fn delete_query(&self, path: &str, query: Option<&Value>) -> Result<Value> {
        self.transport()?
            .request(
                Method::DELETE,
                path,
                RequestOptions {
                    query,
                    ..Default::default()
                },
            )
            .await
    }

    pub(crate) async fn post_multipart(
        &self,
        path: &str,
        fields: Option<&Value>,
        files: Vec<(String, FileSource)>,
    ) -> Result<Value> {
        self.transport()?.post_multipart(path, fields, files).await
    }
}

/// Builder for creating a [`ZapiClient`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    api_key: Option<String>,
    app_id: Option<String>,
    base_url: Option<String>,
    bearer_token: Option<String>,
    timeout: Option<Duration>,
    debug: bool,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key (required).
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the app id (required).
    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    /// Override the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set an initial bearer token.
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Set the request timeout (default 30 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enable connection-level debug output.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<ZapiClient> {
        let api_key = self.api_key.unwrap_or_default();
        if api_key.trim().is_empty() {
            return Err(Error::config("api key must not be empty"));
        }
        let app_id = self.app_id.unwrap_or_default();
        if app_id.trim().is_empty() {
            return Err(Error::config("app id must not be empty"));
        }

        let mut config = ClientConfig::new(api_key, app_id);
        if let Some(base_url) = self.base_url {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        config.bearer_token = self.bearer_token;
        config.timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        config.debug = self.debug;

        Ok(ZapiClient {
            inner: Arc::new(Inner {
                config: RwLock::new(Arc::new(config)),
                transport: Mutex::new(None),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_api_key() {
        let result = ZapiClient::builder().app_id("app").build();
        assert!(result.is_err());
        let result = ZapiClient::new("", "app");
        assert!(result.is_err());
    }

    #[test]
    fn builder_requires_app_id() {
        let result = ZapiClient::builder().api_key("key").build();
        assert!(result.is_err());
        let result = ZapiClient::new("key", "");
        assert!(result.is_err());
    }

    #[test]
    fn defaults_are_applied() {
        let client = ZapiClient::new("key", "app").unwrap();
        assert_eq!(client.base_url(), crate::config::DEFAULT_BASE_URL);
        assert_eq!(client.timeout(), Duration::from_secs(30));
        assert!(!client.debug());
        assert!(client.bearer_token().is_none());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ZapiClient::builder()
            .api_key("key")
            .app_id("app")
            .base_url("http://localhost:8080/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");

        client.set_base_url("http://example.com/api/");
        assert_eq!(client.base_url(), "http://example.com/api");
    }

    #[test]
    fn transport_is_cached_until_config_changes() {
        let client = ZapiClient::new("key", "app").unwrap();

        let first = client.transport().unwrap();
        let second = client.transport().unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        client.set_bearer_token("abc");
        let third = client.transport().unwrap();
        assert!(!Arc::ptr_eq(&second, &third));
    }

    #[test]
    fn setters_chain_and_are_readable() {
        let client = ZapiClient::new("key", "app").unwrap();
        client
            .set_api_key("key2")
            .set_app_id("app2")
            .set_timeout(Duration::from_secs(60))
            .set_debug(true)
            .set_bearer_token("tok");

        assert_eq!(client.api_key(), "key2");
        assert_eq!(client.app_id(), "app2");
        assert_eq!(client.timeout(), Duration::from_secs(60));
        assert!(client.debug());
        assert_eq!(client.bearer_token().as_deref(), Some("tok"));

        client.clear_bearer_token();
        assert!(client.bearer_token().is_none());
    }

    #[test]
    fn info_reports_config() {
        let client = ZapiClient::new("key", "app").unwrap();
        let info = client.info();
        assert_eq!(info["appId"], "app");
        assert_eq!(info["timeout"], 30);
        assert!(info["endpoints"].as_array().unwrap().len() >= 30);
    }
}
