//! Admin and operations API.

use serde_json::{json, Map, Value};

use crate::client::ZapiClient;
use crate::error::Result;

use super::require;

/// API for dashboards, queue control, cron jobs, cache and backups.
pub struct AdminApi {
    client: ZapiClient,
}

impl AdminApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    /// Admin dashboard summary.
    pub async fn dashboard(&self) -> Result<Value> {
        self.client.get("admin/dashboard").await
    }

    /// Clear server-side caches, optionally by key pattern.
    pub async fn clear_cache(&self, pattern: Option<&str>) -> Result<Value> {
        let body = match pattern {
            Some(pattern) => json!({ "pattern": pattern }),
            None => Value::Object(Map::new()),
        };
        self.client
            .post("admin/system/cache/clear", Some(&body))
            .await
    }

    /// Platform-wide statistics.
    pub async fn stats(&self) -> Result<Value> {
        self.client.get("admin/stats").await
    }

    /// Background queue statistics.
    pub async fn queue_stats(&self) -> Result<Value> {
        self.client.get("admin/queue/stats").await
    }

    /// Pause the background queue.
    pub async fn pause_queue(&self) -> Result<Value> {
        self.client.post("admin/queue/pause", None).await
    }

    /// Resume the background queue.
    pub async fn resume_queue(&self) -> Result<Value> {
        self.client.post("admin/queue/resume", None).await
    }

    /// Remove finished jobs of the given type (default `completed`).
    pub async fn clean_queue(&self, kind: &str) -> Result<Value> {
        self.client
            .post("admin/queue/clean", Some(&json!({ "type": kind })))
            .await
    }

    /// Status of all cron jobs.
    pub async fn cron_status(&self) -> Result<Value> {
        self.client.get("admin/cron/status").await
    }

    /// Start a cron job by name.
    pub async fn start_cron(&self, job_name: &str) -> Result<Value> {
        require("Job name", job_name)?;
        self.client
            .post(&format!("admin/cron/{job_name}/start"), None)
            .await
    }

    /// Stop a cron job by name.
    pub async fn stop_cron(&self, job_name: &str) -> Result<Value> {
        require("Job name", job_name)?;
        self.client
            .post(&format!("admin/cron/{job_name}/stop"), None)
            .await
    }

    /// Trigger the daily usage reset immediately.
    pub async fn trigger_daily_reset(&self) -> Result<Value> {
        self.client
            .post("admin/cron/trigger/daily-reset", None)
            .await
    }

    /// Trigger the monthly usage reset immediately.
    pub async fn trigger_monthly_reset(&self) -> Result<Value> {
        self.client
            .post("admin/cron/trigger/monthly-reset", None)
            .await
    }

    /// Host and process information.
    pub async fn system_info(&self) -> Result<Value> {
        self.client.get("admin/system/info").await
    }

    /// Fetch a backup by key.
    pub async fn backup(&self, key: &str) -> Result<Value> {
        require("Backup key", key)?;
        self.client
            .get_query("admin/system/backup", Some(&json!({ "key": key })))
            .await
    }

    /// Restore from a backup, optionally restricted to specific tables.
    pub async fn restore(
        &self,
        key: &str,
        backup: Option<&str>,
        tables: Option<&str>,
    ) -> Result<Value> {
        require("Backup key", key)?;
        let mut params = Map::new();
        params.insert("key".into(), json!(key));
        if let Some(backup) = backup {
            params.insert("backup".into(), json!(backup));
        }
        if let Some(tables) = tables {
            params.insert("tables".into(), json!(tables));
        }
        self.client
            .get_query("admin/system/restore", Some(&Value::Object(params)))
            .await
    }
}
