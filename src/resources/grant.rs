//! Grant operations.
//!
//! Grants assign a permission level to a profile over a resource. They are
//! addressed by grant id directly — there is no typeAka/parentAka routing.
//! The wire mutation for creation accepts a batch of commands; this facade
//! sends exactly one and surfaces the first result item.

use serde::Deserialize;

use crate::client::{Error, TurbotClient};
use crate::query::{self, Command, CommandMeta, CommandPayload};
use crate::resources::GrantMetadata;

/// A permission grant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Grant {
    pub turbot: GrantMetadata,
}

impl Grant {
    /// Returns true if the read found an existing grant.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.turbot.exists()
    }
}

/// Addressing and permission fields for grant creation.
#[derive(Debug, Clone, Default)]
pub struct GrantParams {
    /// The resource the permission is granted over.
    pub resource_aka: String,
    /// The profile receiving the permission.
    pub profile_id: String,
    /// The permission type to grant.
    pub permission_type_aka: String,
    /// The permission level to grant.
    pub permission_level_aka: String,
}

#[derive(Debug, Deserialize)]
struct GrantItemsEnvelope {
    grants: GrantItems,
}

#[derive(Debug, Deserialize)]
struct GrantItems {
    #[serde(default)]
    items: Vec<GrantItem>,
}

#[derive(Debug, Deserialize)]
struct GrantItem {
    #[serde(default)]
    turbot: GrantMetadata,
}

#[derive(Debug, Deserialize)]
struct GrantEnvelope {
    grant: Option<Grant>,
}

impl TurbotClient {
    /// Creates a grant.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as `error creating grant: …`.
    /// A well-formed reply with an empty result list is a decode error, not
    /// a silent success.
    pub async fn create_grant(&self, params: &GrantParams) -> Result<GrantMetadata, Error> {
        let command = Command {
            payload: CommandPayload {
                data: serde_json::json!({
                    "permissionTypeAka": params.permission_type_aka,
                    "permissionLevelAka": params.permission_level_aka,
                }),
                turbot_data: None,
            },
            meta: CommandMeta {
                resource_aka: Some(params.resource_aka.clone()),
                profile_id: Some(params.profile_id.clone()),
                ..CommandMeta::default()
            },
        };

        let envelope: GrantItemsEnvelope = self
            .execute(
                query::create_grants_mutation(),
                Some(serde_json::json!({ "commands": [command] })),
            )
            .await
            .map_err(|e| e.context("error creating grant"))?;

        envelope
            .grants
            .items
            .into_iter()
            .next()
            .map(|item| item.turbot)
            .ok_or_else(|| {
                Error::Decode("grant mutation returned no items".to_string())
                    .context("error creating grant")
            })
    }

    /// Reads a grant by id.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as `error reading grant: …`.
    pub async fn read_grant(&self, id: &str) -> Result<Grant, Error> {
        let envelope: GrantEnvelope = self
            .execute(query::grant_query(), Some(serde_json::json!({ "id": id })))
            .await
            .map_err(|e| e.context("error reading grant"))?;
        Ok(envelope.grant.unwrap_or_default())
    }

    /// Deletes a grant by id.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as `error deleting grant: …`.
    pub async fn delete_grant(&self, id: &str) -> Result<(), Error> {
        let command = Command {
            payload: CommandPayload {
                data: serde_json::json!({ "id": id }),
                turbot_data: None,
            },
            meta: CommandMeta::default(),
        };

        self.execute::<serde_json::Value>(
            query::delete_grant_mutation(),
            Some(serde_json::json!({ "command": command })),
        )
        .await
        .map_err(|e| e.context("error deleting grant"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_decodes_metadata() {
        let grant: Grant = serde_json::from_str(
            r#"{
                "turbot": {
                    "id": "17625300",
                    "profileId": "17625100",
                    "resourceId": "17625236"
                }
            }"#,
        )
        .unwrap();

        assert!(grant.exists());
        assert_eq!(grant.turbot.resource_id, "17625236");
    }

    #[test]
    fn test_missing_grant_decodes_to_zero_values() {
        let grant: Grant = serde_json::from_str("{}").unwrap();
        assert!(!grant.exists());
    }
}
