//! Folder resource operations.

use serde::{Deserialize, Serialize};

use crate::client::{Error, TurbotClient};
use crate::resources::ResourceMetadata;

const FOLDER_TYPE_AKA: &str = "tmod:@turbot/turbot#/resource/types/folder";

const FOLDER_PROPERTIES: &[(&str, &str)] = &[("title", "title"), ("description", "description")];

/// A folder in the resource hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Folder {
    pub title: String,
    pub description: String,
    pub turbot: ResourceMetadata,
}

impl TurbotClient {
    /// Creates a folder under `parent_aka`. Returns metadata only; re-read
    /// for the full projection.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as `error creating folder: …`.
    pub async fn create_folder(
        &self,
        parent_aka: &str,
        title: &str,
        description: &str,
    ) -> Result<ResourceMetadata, Error> {
        let data = serde_json::json!({
            "title": title,
            "description": description,
        });
        self.create_with_type("CreateFolder", "folder", FOLDER_TYPE_AKA, parent_aka, data)
            .await
    }

    /// Reads a folder by aka or id.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as `error reading folder: …`.
    pub async fn read_folder(&self, aka: &str) -> Result<Folder, Error> {
        self.read_typed("folder", aka, FOLDER_PROPERTIES).await
    }

    /// Updates the folder identified by `aka`.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as `error updating folder: …`.
    pub async fn update_folder(
        &self,
        aka: &str,
        parent_aka: &str,
        title: &str,
        description: &str,
    ) -> Result<ResourceMetadata, Error> {
        let data = serde_json::json!({
            "title": title,
            "description": description,
        });
        self.update_with_type(
            "UpdateFolder",
            "folder",
            FOLDER_TYPE_AKA,
            parent_aka,
            aka,
            data,
        )
        .await
    }
}
