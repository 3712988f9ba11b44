//! Video analysis API.

use serde_json::{json, Value};

use crate::client::ZapiClient;
use crate::error::Result;

use super::{merge, require};

/// API for video analysis and transcription.
///
/// The file path is sent as a `filePath` JSON field; the server resolves it
/// on its side, so only a non-empty check happens locally.
pub struct VideoApi {
    client: ZapiClient,
}

impl VideoApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// Analyze a video's content.
    pub async fn analyze(&self, file_path: &str, options: Option<&Value>) -> Result<Value> {
        require("Video file path", file_path)?;
        let body = merge(json!({ "filePath": file_path }), options);
        self.client.post("video/analyze", Some(&body)).await
    }

    /// Transcribe a video's audio track.
    pub async fn transcribe(&self, file_path: &str, options: Option<&Value>) -> Result<Value> {
        require("Video file path", file_path)?;
        let body = merge(json!({ "filePath": file_path }), options);
        self.client.post("video/transcribe", Some(&body)).await
    }
}
