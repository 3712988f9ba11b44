//! Backup API.

use serde_json::Value;

use crate::client::ZapiClient;
use crate::error::Result;

use super::require;

/// API for record-level backups.
pub struct BackupApi {
    client: ZapiClient,
}

impl BackupApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// List backups.
    pub async fn list(&self, options: Option<&Value>) -> Result<Value> {
        self.client.get_query("backup", options).await
    }

    /// Get a backup by id.
    pub async fn get(&self, backup_id: &str) -> Result<Value> {
        require("Backup id", backup_id)?;
        self.client.get(&format!("backup/{backup_id}")).await
    }

    /// Backups recorded for one model record.
    pub async fn record_backups(&self, model: &str, record_id: &str) -> Result<Value> {
        require("Model", model)?;
        require("Record id", record_id)?;
        self.client
            .get(&format!("backup/record/{model}/{record_id}"))
            .await
    }

    /// Delete a backup.
    pub async fn delete(&self, backup_id: &str) -> Result<Value> {
        require("Backup id", backup_id)?;
        self.client.delete(&format!("backup/{backup_id}")).await
    }
}
