//! File upload API.

use serde_json::Value;

use crate::client::ZapiClient;
use crate::error::Result;
use crate::transport::FileSource;

use super::require;

/// API for uploaded files.
pub struct UploadApi {
    client: ZapiClient,
}

impl UploadApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// Upload a file as multipart form data under the `file` field.
    ///
    /// A missing path fails locally with a Validation error before any
    /// request is sent.
    pub async fn upload(&self, file: FileSource, options: Option<&Value>) -> Result<Value> {
        self.client
            .post_multipart("upload", options, vec![("file".to_string(), file)])
            .await
    }

    /// List uploaded files.
    pub async fn list(&self, options: Option<&Value>) -> Result<Value> {
        self.client.get_query("upload", options).await
    }

    /// Get one file's details.
    pub async fn get(&self, file_id: &str) -> Result<Value> {
        require("File id", file_id)?;
        self.client.get(&format!("upload/{file_id}")).await
    }

    /// Delete a file.
    pub async fn delete(&self, file_id: &str) -> Result<Value> {
        require("File id", file_id)?;
        self.client.delete(&format!("upload/{file_id}")).await
    }

    /// Storage statistics.
    pub async fn stats(&self) -> Result<Value> {
        self.client.get("upload/stats").await
    }

    /// Remove orphaned files.
    pub async fn cleanup(&self) -> Result<Value> {
        self.client.delete("upload/cleanup").await
    }

    /// Progress of one in-flight upload.
    pub async fn progress(&self, upload_id: &str) -> Result<Value> {
        require("Upload id", upload_id)?;
        self.client.get(&format!("upload/progress/{upload_id}")).await
    }

    /// Progress of every in-flight upload.
    pub async fn all_progress(&self) -> Result<Value> {
        self.client.get("upload/progress/all").await
    }

    /// Create a signed download URL for a file.
    pub async fn create_signed_url(&self, file_id: &str, options: Option<&Value>) -> Result<Value> {
        require("File id", file_id)?;
        self.client
            .post(&format!("upload/url/{file_id}"), options)
            .await
    }
}
