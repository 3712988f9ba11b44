//! HTTP request pipeline.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart;
use reqwest::Method;
use serde_json::Value;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Connect timeout, separate from the configurable request timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// A file to send in a multipart form.
#[derive(Debug, Clone)]
pub enum FileSource {
    /// Read from the local filesystem at send time.
    Path(PathBuf),
    /// In-memory content with an explicit filename.
    Bytes {
        /// Raw file content.
        content: Vec<u8>,
        /// Filename to report in the form part.
        filename: String,
    },
}

impl FileSource {
    /// File on the local filesystem.
    pub fn path(path: impl Into<PathBuf>) -> Self {
        FileSource::Path(path.into())
    }

    /// In-memory content.
    pub fn bytes(content: impl Into<Vec<u8>>, filename: impl Into<String>) -> Self {
        FileSource::Bytes {
            content: content.into(),
            filename: filename.into(),
        }
    }
}

/// Per-request inputs beyond the method and path.
#[derive(Default)]
pub(crate) struct RequestOptions<'a> {
    /// URL-encoded query parameters (flat JSON object).
    pub(crate) query: Option<&'a Value>,
    /// JSON body.
    pub(crate) body: Option<&'a Value>,
    /// Call-specific headers; these win over the defaults.
    pub(crate) headers: Option<HeaderMap>,
}

/// Stateless request sender.
///
/// Built from one [`ClientConfig`] snapshot; the default header set is fixed
/// at construction time. The facade discards it whenever the configuration
/// changes.
pub(crate) struct Transport {
    http: reqwest::Client,
    base_url: String,
}

impl Transport {
    pub(crate) fn new(config: &ClientConfig) -> Result<Self> {
        // Reject unparseable base URLs at construction time.
        Url::parse(&config.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static("x-api-key"),
            HeaderValue::from_str(&config.api_key)
                .map_err(|_| Error::config("api key contains invalid header characters"))?,
        );
        headers.insert(
            HeaderName::from_static("x-app-id"),
            HeaderValue::from_str(&config.app_id)
                .map_err(|_| Error::config("app id contains invalid header characters"))?,
        );
        if let Some(token) = &config.bearer_token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| Error::config("bearer token contains invalid header characters"))?;
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(format!("zapi-client/{}", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .connection_verbose(config.debug)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send one request and parse the JSON result.
    ///
    /// One attempt per call; no retries. Connection-level failures surface as
    /// a `Generic` error with code 0 and no HTTP status.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        opts: RequestOptions<'_>,
    ) -> Result<Value> {
        let url = self.url(path);
        tracing::debug!(%method, %url, "sending request");

        let mut request = self.http.request(method, &url);
        if let Some(query) = opts.query {
            request = request.query(query);
        }
        if let Some(body) = opts.body {
            request = request.json(body);
        }
        if let Some(headers) = opts.headers {
            request = request.headers(headers);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Send a multipart form POST.
    ///
    /// The JSON content type does not apply here; reqwest sets the multipart
    /// boundary content type on the request, which wins over the defaults.
    pub(crate) async fn post_multipart(
        &self,
        path: &str,
        fields: Option<&Value>,
        files: Vec<(String, FileSource)>,
    ) -> Result<Value> {
        let mut form = multipart::Form::new();

        if let Some(Value::Object(map)) = fields {
            for (name, value) in map {
                let text = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                form = form.text(name.clone(), text);
            }
        }

        for (name, file) in files {
            let part = match file {
                FileSource::Path(path) => {
                    let filename = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| "file".to_string());
                    let content = tokio::fs::read(&path).await.map_err(|err| {
                        Error::validation(format!("file not found: {}: {err}", path.display()))
                    })?;
                    multipart::Part::bytes(content).file_name(filename)
                }
                FileSource::Bytes { content, filename } => {
                    multipart::Part::bytes(content).file_name(filename)
                }
            };
            form = form.part(name, part);
        }

        let url = self.url(path);
        tracing::debug!(%url, "sending multipart request");

        let response = self.http.post(&url).multipart(form).send().await?;
        Self::handle_response(response).await
    }

    async fn handle_response(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            if text.trim().is_empty() {
                // Empty success body parses as an empty object.
                return Ok(Value::Object(serde_json::Map::new()));
            }
            serde_json::from_str(&text).map_err(|err| Error::Generic {
                message: format!("malformed response: {err}"),
                code: 0,
                status: Some(status.as_u16()),
                body: None,
            })
        } else {
            tracing::debug!(status = status.as_u16(), "request failed");
            Err(Error::from_response(status.as_u16(), &text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    fn config() -> ClientConfig {
        ClientConfig::new("key".into(), "app".into())
    }

    #[test]
    fn url_joining_strips_slashes() {
        let mut cfg = config();
        cfg.base_url = "http://localhost:8080/".into();
        let transport = Transport::new(&cfg).unwrap();
        assert_eq!(transport.url("auth/login"), "http://localhost:8080/auth/login");
        assert_eq!(transport.url("/auth/login"), "http://localhost:8080/auth/login");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let mut cfg = config();
        cfg.base_url = "not a url".into();
        assert!(Transport::new(&cfg).is_err());
    }

    #[test]
    fn invalid_credential_characters_are_rejected() {
        let mut cfg = config();
        cfg.api_key = "key\nwith\nnewlines".into();
        assert!(Transport::new(&cfg).is_err());
    }
}
