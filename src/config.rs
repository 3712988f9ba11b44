//! Client configuration.

use std::time::Duration;

/// Production host used when no base URL is given.
pub const DEFAULT_BASE_URL: &str = "https://dev.zulficoresystem.net";

/// Default timeout for requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable configuration snapshot.
///
/// The facade holds the current snapshot behind a lock; every setter replaces
/// the whole value and drops the cached transport, so a transport is always
/// built from exactly one snapshot.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub(crate) base_url: String,
    pub(crate) api_key: String,
    pub(crate) app_id: String,
    pub(crate) bearer_token: Option<String>,
    pub(crate) timeout: Duration,
    pub(crate) debug: bool,
}

impl ClientConfig {
    pub(crate) fn new(api_key: String, app_id: String) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            app_id,
            bearer_token: None,
            timeout: DEFAULT_TIMEOUT,
            debug: false,
        }
    }
}
