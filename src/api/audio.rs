//! Audio API.

use serde_json::Value;

use crate::client::ZapiClient;
use crate::error::Result;

/// API for text-to-speech, transcription and translation.
pub struct AudioApi {
    client: ZapiClient,
}

impl AudioApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// Generate speech audio from text.
    pub async fn speech(&self, data: &Value) -> Result<Value> {
        self.client.post("audio/speech", Some(data)).await
    }

    /// Transcribe audio to text.
    pub async fn transcriptions(&self, data: &Value) -> Result<Value> {
        self.client.post("audio/transcriptions", Some(data)).await
    }

    /// Translate audio into English text.
    pub async fn translations(&self, data: &Value) -> Result<Value> {
        self.client.post("audio/translations", Some(data)).await
    }
}
