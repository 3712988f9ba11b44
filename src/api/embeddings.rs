//! Embeddings API.

use serde_json::{json, Value};

use crate::client::ZapiClient;
use crate::error::{Error, Result};

use super::merge;

/// Model used when the caller does not pick one.
const DEFAULT_MODEL: &str = "text-embedding-ada-002";

/// API for text embeddings.
pub struct EmbeddingsApi {
    client: ZapiClient,
}

impl EmbeddingsApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// Create embeddings for a text input with the default model.
    pub async fn create(&self, input: &str) -> Result<Value> {
        self.create_with(json!(input), DEFAULT_MODEL, None).await
    }

    /// Create embeddings with an explicit model and extra options.
    ///
    /// `input` may be a single string or an array of strings; an empty input
    /// fails locally with a Validation error.
    pub async fn create_with(
        &self,
        input: Value,
        model: &str,
        options: Option<&Value>,
    ) -> Result<Value> {
        let empty = match &input {
            Value::String(s) => s.trim().is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Null => true,
            _ => false,
        };
        if empty {
            return Err(Error::validation("Input must not be empty"));
        }

        let body = merge(json!({ "input": input, "model": model }), options);
        self.client.post("embeddings", Some(&body)).await
    }
}
