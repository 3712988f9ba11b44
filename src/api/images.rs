//! Image generation API.

use serde_json::{json, Value};

use crate::client::ZapiClient;
use crate::error::{Error, Result};

use super::merge;

/// API for AI image generation.
pub struct ImagesApi {
    client: ZapiClient,
}

impl ImagesApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// Generate images from a prompt.
    ///
    /// Recognized options include `size`, `n`, `model` and `quality`.
    pub async fn generate(&self, prompt: &str, options: Option<&Value>) -> Result<Value> {
        if prompt.trim().is_empty() {
            return Err(Error::validation("Prompt must not be empty"));
        }
        let body = merge(json!({ "prompt": prompt }), options);
        self.client.post("images/generations", Some(&body)).await
    }

    /// Edit an existing image. Not implemented by the remote service yet.
    pub async fn edit(
        &self,
        _image_path: &str,
        _prompt: &str,
        _options: Option<&Value>,
    ) -> Result<Value> {
        Err(Error::not_implemented("image editing is not implemented"))
    }

    /// Create variations of an image. Not implemented by the remote service
    /// yet.
    pub async fn create_variations(
        &self,
        _image_path: &str,
        _options: Option<&Value>,
    ) -> Result<Value> {
        Err(Error::not_implemented(
            "image variations are not implemented",
        ))
    }
}
