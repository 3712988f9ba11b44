//! Entity metadata API.

use serde_json::{json, Value};

use crate::client::ZapiClient;
use crate::error::Result;

use super::{metadata_path, require};

/// API for metadata attached to arbitrary entities.
pub struct MetadataApi {
    client: ZapiClient,
}

impl MetadataApi {
    pub(crate) fn new(client: ZapiClient) -> Self {
        Self { client }
    }

    fn base(entity_type: &str, entity_id: &str) -> String {
        format!("metadata/{entity_type}/{entity_id}")
    }

    /// Read metadata. An empty `path` returns the whole document.
    pub async fn get(&self, entity_type: &str, entity_id: &str, path: &str) -> Result<Value> {
        require("Entity type", entity_type)?;
        require("Entity id", entity_id)?;
        self.client
            .get(&metadata_path(&Self::base(entity_type, entity_id), path))
            .await
    }

    /// Replace the value at `path`.
    pub async fn update(
        &self,
        entity_type: &str,
        entity_id: &str,
        path: &str,
        value: &Value,
    ) -> Result<Value> {
        require("Entity type", entity_type)?;
        require("Entity id", entity_id)?;
        require("Metadata path", path)?;
        let body = json!({ "value": value });
        self.client
            .put(
                &metadata_path(&Self::base(entity_type, entity_id), path),
                Some(&body),
            )
            .await
    }

    /// Partially update the value at `path`.
    pub async fn patch(
        &self,
        entity_type: &str,
        entity_id: &str,
        path: &str,
        value: &Value,
    ) -> Result<Value> {
        require("Entity type", entity_type)?;
        require("Entity id", entity_id)?;
        require("Metadata path", path)?;
        let body = json!({ "value": value });
        self.client
            .patch(
                &metadata_path(&Self::base(entity_type, entity_id), path),
                Some(&body),
            )
            .await
    }

    /// Delete the value at `path`.
    pub async fn delete(&self, entity_type: &str, entity_id: &str, path: &str) -> Result<Value> {
        require("Entity type", entity_type)?;
        require("Entity id", entity_id)?;
        require("Metadata path", path)?;
        self.client
            .delete(&metadata_path(&Self::base(entity_type, entity_id), path))
            .await
    }
}
