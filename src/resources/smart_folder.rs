//! Smart folder operations.
//!
//! A smart folder is a rule-based virtual grouping of resources. It relates
//! to resources through an attach/detach relation that is distinct from the
//! parent/child hierarchy: attachment mutations address the relation itself
//! by resource id and smart-folder id, with no typeAka/parentAka routing.

use serde::{Deserialize, Serialize};

use crate::client::{Error, TurbotClient};
use crate::query::{self, Command, CommandMeta, CommandPayload};
use crate::resources::ResourceMetadata;

const SMART_FOLDER_TYPE_AKA: &str = "tmod:@turbot/turbot#/resource/types/smartFolder";

/// A smart folder with its attached resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SmartFolder {
    pub title: String,
    pub description: String,
    /// Filter rules selecting resources for this smart folder.
    pub filters: Vec<String>,
    pub turbot: ResourceMetadata,
    pub attached_resources: AttachedResources,
}

/// The attached-resource relation of a smart folder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachedResources {
    pub items: Vec<AttachedResource>,
}

/// One attached resource, by identity metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachedResource {
    pub turbot: ResourceMetadata,
}

impl SmartFolder {
    /// Returns true if the read found an existing smart folder.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.turbot.exists()
    }

    /// Ids of the resources currently attached to this smart folder.
    #[must_use]
    pub fn attached_resource_ids(&self) -> Vec<&str> {
        self.attached_resources
            .items
            .iter()
            .map(|item| item.turbot.id.as_str())
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct SmartFolderEnvelope {
    resource: Option<SmartFolder>,
}

impl TurbotClient {
    /// Creates a smart folder under `parent_aka`.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as
    /// `error creating smart folder: …`.
    pub async fn create_smart_folder(
        &self,
        parent_aka: &str,
        title: &str,
        description: &str,
        filters: &[String],
    ) -> Result<ResourceMetadata, Error> {
        let data = serde_json::json!({
            "title": title,
            "description": description,
            "filters": filters,
        });
        self.create_with_type(
            "CreateSmartFolder",
            "smart folder",
            SMART_FOLDER_TYPE_AKA,
            parent_aka,
            data,
        )
        .await
    }

    /// Reads a smart folder by aka or id, including its attached resources.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as
    /// `error reading smart folder: …`.
    pub async fn read_smart_folder(&self, aka: &str) -> Result<SmartFolder, Error> {
        let envelope: SmartFolderEnvelope = self
            .execute(
                query::smart_folder_query(),
                Some(serde_json::json!({ "id": aka })),
            )
            .await
            .map_err(|e| e.context("error reading smart folder"))?;
        Ok(envelope.resource.unwrap_or_default())
    }

    /// Updates the smart folder identified by `aka`.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as
    /// `error updating smart folder: …`.
    pub async fn update_smart_folder(
        &self,
        aka: &str,
        parent_aka: &str,
        title: &str,
        description: &str,
        filters: &[String],
    ) -> Result<ResourceMetadata, Error> {
        let data = serde_json::json!({
            "title": title,
            "description": description,
            "filters": filters,
        });
        self.update_with_type(
            "UpdateSmartFolder",
            "smart folder",
            SMART_FOLDER_TYPE_AKA,
            parent_aka,
            aka,
            data,
        )
        .await
    }

    /// Attaches a smart folder to a resource.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as
    /// `error creating smart folder attachment: …`.
    pub async fn create_smart_folder_attachment(
        &self,
        resource_id: &str,
        smart_folder_id: &str,
    ) -> Result<(), Error> {
        let command = attachment_command(resource_id, smart_folder_id);

        self.execute::<serde_json::Value>(
            query::create_smart_folder_attachment_mutation(),
            Some(serde_json::json!({ "command": command })),
        )
        .await
        .map_err(|e| e.context("error creating smart folder attachment"))?;
        Ok(())
    }

    /// Detaches a smart folder from a resource.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as
    /// `error deleting smart folder attachment: …`.
    pub async fn delete_smart_folder_attachment(
        &self,
        resource_id: &str,
        smart_folder_id: &str,
    ) -> Result<(), Error> {
        let command = attachment_command(resource_id, smart_folder_id);

        self.execute::<serde_json::Value>(
            query::delete_smart_folder_attachment_mutation(),
            Some(serde_json::json!({ "command": command })),
        )
        .await
        .map_err(|e| e.context("error deleting smart folder attachment"))?;
        Ok(())
    }
}

/// Attachment commands carry the two ids in meta and nothing else.
fn attachment_command(resource_id: &str, smart_folder_id: &str) -> Command {
    Command {
        payload: CommandPayload {
            data: serde_json::json!({}),
            turbot_data: None,
        },
        meta: CommandMeta {
            resource_id: Some(resource_id.to_string()),
            smart_folder_id: Some(smart_folder_id.to_string()),
            ..CommandMeta::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smart_folder_decodes_attached_resources() {
        let folder: SmartFolder = serde_json::from_str(
            r#"{
                "title": "Cost Controls",
                "filters": ["resourceType:tmod:@turbot/aws#/resource/types/account"],
                "turbot": { "id": "17625800" },
                "attachedResources": {
                    "items": [
                        { "turbot": { "id": "17625236" } },
                        { "turbot": { "id": "17625237" } }
                    ]
                }
            }"#,
        )
        .unwrap();

        assert!(folder.exists());
        assert_eq!(folder.attached_resource_ids(), vec!["17625236", "17625237"]);
    }

    #[test]
    fn test_attachment_command_carries_ids_in_meta() {
        let command = attachment_command("17625236", "17625800");
        let value = serde_json::to_value(&command).unwrap();

        assert_eq!(value["meta"]["resourceId"], "17625236");
        assert_eq!(value["meta"]["smartFolderId"], "17625800");
        assert!(value["meta"].get("typeAka").is_none());
        assert!(value["meta"].get("parentAka").is_none());
    }
}
