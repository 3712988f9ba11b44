//! Client error types.

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error discriminant, for branching without destructuring the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 400 or a local precondition failure (empty identifier, bad enum value).
    Validation,
    /// 401, invalid or expired credential.
    Authentication,
    /// 429, quota exhausted.
    RateLimit,
    /// 5xx.
    Server,
    /// Everything else, including transport-level failures.
    Generic,
}

impl ErrorKind {
    /// Map an HTTP status code to an error kind.
    ///
    /// Pure function of the status: the same status always yields the same
    /// kind. Only called for non-2xx responses.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ErrorKind::Validation,
            401 => ErrorKind::Authentication,
            429 => ErrorKind::RateLimit,
            500..=599 => ErrorKind::Server,
            _ => ErrorKind::Generic,
        }
    }
}

/// Rate limit window reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitPeriod {
    Daily,
    Hourly,
    Minutely,
}

impl RateLimitPeriod {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "daily" => Some(RateLimitPeriod::Daily),
            "hourly" => Some(RateLimitPeriod::Hourly),
            "minutely" => Some(RateLimitPeriod::Minutely),
            _ => None,
        }
    }
}

/// Client error type.
///
/// Exactly one kind is produced per failed call. For HTTP failures the kind
/// is selected solely by status code: 400 -> `Validation`, 401 ->
/// `Authentication`, 429 -> `RateLimit`, 5xx -> `Server`, any other non-2xx
/// -> `Generic`. Transport-level failures (DNS, refused connection, timeout)
/// are `Generic` with code 0 and no status.
#[derive(Debug, Error)]
pub enum Error {
    /// The request was rejected before or by server-side validation.
    #[error("validation error: {message}")]
    Validation {
        /// Human-readable message.
        message: String,
        /// Numeric error code (0 for local precondition failures).
        code: i64,
        /// Field name to message mapping from the response body.
        errors: BTreeMap<String, String>,
        /// HTTP status, if the error came from a response.
        status: Option<u16>,
        /// Decoded response body, if any.
        body: Option<Value>,
    },

    /// The credential was rejected.
    #[error("authentication error: {message}")]
    Authentication {
        message: String,
        code: i64,
        status: u16,
        body: Option<Value>,
    },

    /// A rate limit was exceeded.
    #[error("rate limit exceeded: {message}")]
    RateLimit {
        message: String,
        code: i64,
        /// Seconds to wait before retrying, when the server says.
        retry_after: Option<u64>,
        /// Which limit window was hit, when the server says.
        period: Option<RateLimitPeriod>,
        status: u16,
        body: Option<Value>,
    },

    /// The server failed (5xx).
    #[error("server error ({status}): {message}")]
    Server {
        message: String,
        code: i64,
        status: u16,
        body: Option<Value>,
    },

    /// Anything else: unexpected statuses, malformed bodies, transport
    /// failures, configuration mistakes.
    #[error("{message}")]
    Generic {
        message: String,
        code: i64,
        status: Option<u16>,
        body: Option<Value>,
    },
}

impl Error {
    /// Local validation failure, raised before any network I/O.
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
            code: 0,
            errors: BTreeMap::new(),
            status: None,
            body: None,
        }
    }

    /// Configuration mistake (missing credential, unparseable base URL).
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Error::Generic {
            message: message.into(),
            code: 0,
            status: None,
            body: None,
        }
    }

    /// Operation the remote service has not implemented yet.
    pub(crate) fn not_implemented(message: impl Into<String>) -> Self {
        Error::Generic {
            message: message.into(),
            code: 501,
            status: None,
            body: None,
        }
    }

    /// Build the error for a non-2xx response.
    pub(crate) fn from_response(status: u16, raw_body: &str) -> Self {
        let body: Option<Value> = serde_json::from_str(raw_body).ok();
        let message = body_message(&body);
        let code = body_code(&body, status);

        match ErrorKind::from_status(status) {
            ErrorKind::Validation => Error::Validation {
                errors: field_errors(&body),
                message,
                code,
                status: Some(status),
                body,
            },
            ErrorKind::Authentication => Error::Authentication {
                message,
                code,
                status,
                body,
            },
            ErrorKind::RateLimit => {
                let retry_after = retry_after(&body);
                let period = rate_limit_period(&body)
                    .or_else(|| compat::period_from_message(&message));
                Error::RateLimit {
                    message,
                    code,
                    retry_after,
                    period,
                    status,
                    body,
                }
            }
            ErrorKind::Server => Error::Server {
                message,
                code,
                status,
                body,
            },
            ErrorKind::Generic => Error::Generic {
                message,
                code,
                status: Some(status),
                body,
            },
        }
    }

    /// The error's kind discriminant.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation { .. } => ErrorKind::Validation,
            Error::Authentication { .. } => ErrorKind::Authentication,
            Error::RateLimit { .. } => ErrorKind::RateLimit,
            Error::Server { .. } => ErrorKind::Server,
            Error::Generic { .. } => ErrorKind::Generic,
        }
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        match self {
            Error::Validation { message, .. }
            | Error::Authentication { message, .. }
            | Error::RateLimit { message, .. }
            | Error::Server { message, .. }
            | Error::Generic { message, .. } => message,
        }
    }

    /// Numeric error code from the response body, or 0.
    pub fn code(&self) -> i64 {
        match self {
            Error::Validation { code, .. }
            | Error::Authentication { code, .. }
            | Error::RateLimit { code, .. }
            | Error::Server { code, .. }
            | Error::Generic { code, .. } => *code,
        }
    }

    /// HTTP status, if the error came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Validation { status, .. } | Error::Generic { status, .. } => *status,
            Error::Authentication { status, .. }
            | Error::RateLimit { status, .. }
            | Error::Server { status, .. } => Some(*status),
        }
    }

    /// Decoded response body, if any.
    pub fn response_body(&self) -> Option<&Value> {
        match self {
            Error::Validation { body, .. }
            | Error::Authentication { body, .. }
            | Error::RateLimit { body, .. }
            | Error::Server { body, .. }
            | Error::Generic { body, .. } => body.as_ref(),
        }
    }

    /// Seconds to wait before retrying a rate-limited call.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Error::RateLimit { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    /// Rate limit window, when known.
    pub fn rate_limit_period(&self) -> Option<RateLimitPeriod> {
        match self {
            Error::RateLimit { period, .. } => *period,
            _ => None,
        }
    }

    /// Field-level validation errors, when the server reported them.
    pub fn validation_errors(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Error::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }

    /// Message for a single invalid field.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.validation_errors()?.get(field).map(String::as_str)
    }

    /// Whether a server error looks transient (502/503/504, or the message
    /// mentions a temporary condition).
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Server {
                status, message, ..
            } => {
                matches!(status, 502 | 503 | 504) || compat::transient_by_message(message)
            }
            _ => false,
        }
    }

    /// Check if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Authentication { .. })
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::RateLimit { .. })
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Server { .. })
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Generic {
            message: format!("connection error: {err}"),
            code: 0,
            status: None,
            body: None,
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::config(format!("invalid URL: {err}"))
    }
}

fn body_message(body: &Option<Value>) -> String {
    body.as_ref()
        .and_then(|b| {
            b.get("message")
                .or_else(|| b.get("error"))
                .and_then(Value::as_str)
        })
        .unwrap_or("unknown error")
        .to_string()
}

fn body_code(body: &Option<Value>, status: u16) -> i64 {
    body.as_ref()
        .and_then(|b| b.get("code"))
        .and_then(|c| match c {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        })
        .unwrap_or(i64::from(status))
}

fn field_errors(body: &Option<Value>) -> BTreeMap<String, String> {
    let map = body
        .as_ref()
        .and_then(|b| b.get("errors").or_else(|| b.get("validation_errors")))
        .and_then(Value::as_object);

    match map {
        Some(map) => map
            .iter()
            .map(|(field, msg)| {
                let msg = msg
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| msg.to_string());
                (field.clone(), msg)
            })
            .collect(),
        None => BTreeMap::new(),
    }
}

fn retry_after(body: &Option<Value>) -> Option<u64> {
    body.as_ref()?
        .get("retry_after")
        .or_else(|| body.as_ref()?.get("retryAfter"))
        .and_then(Value::as_u64)
}

fn rate_limit_period(body: &Option<Value>) -> Option<RateLimitPeriod> {
    body.as_ref()?
        .get("rate_limit_type")
        .or_else(|| body.as_ref()?.get("rateLimitType"))
        .and_then(Value::as_str)
        .and_then(RateLimitPeriod::parse)
}

/// Message-substring fallbacks for servers that omit the structured fields.
///
/// These never override structured data: they only run when
/// `rate_limit_type` is absent or the status alone is inconclusive.
mod compat {
    use super::RateLimitPeriod;

    pub(super) fn period_from_message(message: &str) -> Option<RateLimitPeriod> {
        let message = message.to_ascii_lowercase();
        if message.contains("daily") {
            Some(RateLimitPeriod::Daily)
        } else if message.contains("hourly") {
            Some(RateLimitPeriod::Hourly)
        } else if message.contains("minutely") || message.contains("per minute") {
            Some(RateLimitPeriod::Minutely)
        } else {
            None
        }
    }

    const TRANSIENT_KEYWORDS: &[&str] = &["temporary", "maintenance", "overloaded", "timeout"];

    pub(super) fn transient_by_message(message: &str) -> bool {
        let message = message.to_ascii_lowercase();
        TRANSIENT_KEYWORDS.iter().any(|k| message.contains(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_is_pure() {
        assert_eq!(ErrorKind::from_status(400), ErrorKind::Validation);
        assert_eq!(ErrorKind::from_status(401), ErrorKind::Authentication);
        assert_eq!(ErrorKind::from_status(429), ErrorKind::RateLimit);
        for status in [500, 502, 503, 504, 599] {
            assert_eq!(ErrorKind::from_status(status), ErrorKind::Server);
        }
        for status in [402, 403, 404, 409, 418] {
            assert_eq!(ErrorKind::from_status(status), ErrorKind::Generic);
        }
        // Same status, same kind.
        assert_eq!(ErrorKind::from_status(429), ErrorKind::from_status(429));
    }

    #[test]
    fn rate_limit_reads_structured_fields() {
        let err = Error::from_response(
            429,
            r#"{"message":"too many requests","retry_after":30,"rate_limit_type":"hourly"}"#,
        );
        assert_eq!(err.kind(), ErrorKind::RateLimit);
        assert_eq!(err.retry_after(), Some(30));
        assert_eq!(err.rate_limit_period(), Some(RateLimitPeriod::Hourly));
        assert_eq!(err.status(), Some(429));
        assert_eq!(err.message(), "too many requests");
    }

    #[test]
    fn rate_limit_period_falls_back_to_message() {
        let err = Error::from_response(429, r#"{"message":"daily quota exhausted"}"#);
        assert_eq!(err.rate_limit_period(), Some(RateLimitPeriod::Daily));
        assert_eq!(err.retry_after(), None);
    }

    #[test]
    fn structured_period_wins_over_message() {
        let err = Error::from_response(
            429,
            r#"{"message":"daily quota exhausted","rate_limit_type":"minutely"}"#,
        );
        assert_eq!(err.rate_limit_period(), Some(RateLimitPeriod::Minutely));
    }

    #[test]
    fn validation_carries_field_errors() {
        let err = Error::from_response(
            400,
            r#"{"message":"invalid input","errors":{"email":"must be a valid address"}}"#,
        );
        assert!(err.is_validation());
        assert_eq!(err.field_error("email"), Some("must be a valid address"));
        assert_eq!(err.field_error("phone"), None);
    }

    #[test]
    fn code_accepts_string_and_number() {
        let err = Error::from_response(400, r#"{"message":"bad","code":"1042"}"#);
        assert_eq!(err.code(), 1042);
        let err = Error::from_response(400, r#"{"message":"bad","code":7}"#);
        assert_eq!(err.code(), 7);
        // Absent code falls back to the status.
        let err = Error::from_response(404, r#"{"message":"missing"}"#);
        assert_eq!(err.code(), 404);
    }

    #[test]
    fn undecodable_body_gets_fallback_message() {
        let err = Error::from_response(503, "<html>bad gateway</html>");
        assert!(err.is_server_error());
        assert_eq!(err.message(), "unknown error");
        assert!(err.response_body().is_none());
        assert!(err.is_transient());
    }

    #[test]
    fn server_transience() {
        for status in [502, 503, 504] {
            let err = Error::from_response(status, "{}");
            assert!(err.is_transient());
        }
        let err = Error::from_response(500, r#"{"message":"boom"}"#);
        assert!(!err.is_transient());
        let err = Error::from_response(500, r#"{"message":"temporary outage"}"#);
        assert!(err.is_transient());
    }

    #[test]
    fn error_field_is_message_fallback() {
        let err = Error::from_response(401, r#"{"error":"token expired"}"#);
        assert!(err.is_auth_error());
        assert_eq!(err.message(), "token expired");
    }
}
