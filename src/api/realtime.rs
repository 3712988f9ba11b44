//! Realtime chat sessions API.

use serde_json::Value;

use crate::client::ZapiClient;
use crate::error::Result;

use super::require;

/// API for realtime conversation sessions.
pub struct RealtimeApi {
    client: ZapiClient,
}

impl RealtimeApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// List sessions.
    pub async fn sessions(&self, options: Option<&Value>) -> Result<Value> {
        self.client.get_query("realtime/sessions", options).await
    }

    /// Create a session.
    pub async fn create_session(&self, data: &Value) -> Result<Value> {
        self.client.post("realtime/sessions", Some(data)).await
    }

    /// Get one session.
    pub async fn session(&self, session_id: &str) -> Result<Value> {
        require("Session id", session_id)?;
        self.client
            .get(&format!("realtime/sessions/{session_id}"))
            .await
    }

    /// Resume a suspended session.
    pub async fn resume_session(&self, session_id: &str) -> Result<Value> {
        require("Session id", session_id)?;
        self.client
            .post(&format!("realtime/sessions/{session_id}/resume"), None)
            .await
    }

    /// Message history for a session.
    pub async fn session_history(
        &self,
        session_id: &str,
        options: Option<&Value>,
    ) -> Result<Value> {
        require("Session id", session_id)?;
        self.client
            .get_query(&format!("realtime/sessions/{session_id}/history"), options)
            .await
    }

    /// Delete a session.
    pub async fn delete_session(&self, session_id: &str) -> Result<Value> {
        require("Session id", session_id)?;
        self.client
            .delete(&format!("realtime/sessions/{session_id}"))
            .await
    }

    /// Models available for realtime use.
    pub async fn models(&self) -> Result<Value> {
        self.client.get("realtime/models").await
    }

    /// Connection details for the streaming channel.
    pub async fn stream_info(&self) -> Result<Value> {
        self.client.get("realtime/stream/info").await
    }

    /// Realtime usage statistics.
    pub async fn stats(&self) -> Result<Value> {
        self.client.get("realtime/stats").await
    }
}
