//! HTTP client SDK for the ZAPI AI platform.
//!
//! This crate provides a typed client for interacting with the ZAPI server.
//!
//! # Example
//!
//! ```no_run
//! use serde_json::json;
//! use zapi_client::{Result, ZapiClient};
//!
//! # async fn example() -> Result<()> {
//! // Create a client
//! let client = ZapiClient::builder()
//!     .api_key("zapi_live_abc123")
//!     .app_id("app_456")
//!     .build()?;
//!
//! // Log in and store the bearer token for later calls
//! let login = client
//!     .auth()
//!     .login_with_email("user@example.com", "secret", None)
//!     .await?;
//! if let Some(token) = login["data"]["token"].as_str() {
//!     client.set_bearer_token(token);
//! }
//!
//! // Fetch the caller's profile
//! let profile = client.user().get_profile().await?;
//! println!("Hello, {}", profile["data"]["name"]);
//!
//! // Create an AI completion
//! let response = client
//!     .responses()
//!     .create(&json!({
//!         "model": "gpt-4",
//!         "messages": [{"role": "user", "content": "Hello!"}],
//!     }))
//!     .await?;
//! println!("{}", response["choices"][0]["message"]["content"]);
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! The client exposes every server endpoint group through an accessor on
//! [`ZapiClient`]:
//!
//! - **Auth**: Register, login, OTP, password and token flows
//! - **Users**: Profile, account and user administration
//! - **Apps & Admin**: Application and backend administration
//! - **AI**: Responses, embeddings, images, audio, video, realtime
//! - **Content**: Content records, docs, metadata
//! - **Billing**: Plans and subscriptions
//! - **Platform**: Uploads, webhooks, notifications, roles, logs, backup,
//!   remote config, system and debug utilities
//!
//! Request payloads and responses are untyped [`serde_json::Value`] documents;
//! the server is the source of truth for their shape.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use client::{ClientBuilder, ZapiClient};
pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{Error, ErrorKind, RateLimitPeriod, Result};
pub use transport::FileSource;

// Re-export API types that appear in method signatures
pub use api::Identity;
