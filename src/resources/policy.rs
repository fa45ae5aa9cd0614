//! Policy setting and policy value operations.
//!
//! A policy setting is a configured override; a policy value is the computed
//! effective value of a policy on a resource. Finds filter by policy-type
//! uri and resource aka, and the "no default setting" case is deliberately a
//! zero-value result rather than an error — callers branch on
//! [`PolicySetting::exists`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{Error, TurbotClient};
use crate::query::{self, Command, CommandMeta, CommandPayload, TurbotData};
use crate::resources::PolicyMetadata;

/// A reference to a policy type by uri.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyTypeRef {
    pub uri: String,
}

/// A configured policy setting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PolicySetting {
    pub value: Value,
    pub value_source: String,
    pub template: String,
    pub precedence: String,
    #[serde(rename = "type")]
    pub policy_type: PolicyTypeRef,
    #[serde(rename = "default")]
    pub is_default: bool,
    pub note: String,
    pub valid_from_timestamp: Option<DateTime<Utc>>,
    pub valid_to_timestamp: Option<DateTime<Utc>>,
    pub turbot: PolicyMetadata,
}

impl PolicySetting {
    /// Returns true if this is a real setting rather than the zero value a
    /// find returns when no default setting matches.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.turbot.exists()
    }
}

/// The computed effective value of a policy on a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PolicyValue {
    pub value: Value,
    pub precedence: String,
    pub state: String,
    pub reason: String,
    pub details: Value,
    /// The setting this value was computed from, when the server reports one.
    pub setting: Option<PolicySetting>,
    pub turbot: PolicyMetadata,
}

impl PolicyValue {
    /// Returns true if the read found a computed value.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.turbot.exists()
    }
}

/// Addressing for a policy value read: by value id, or by policy type +
/// resource. The two forms are mutually exclusive by construction.
#[derive(Debug, Clone, Copy)]
pub enum PolicyValueLookup<'a> {
    /// Address the value by its id.
    Id(&'a str),
    /// Address the value by policy-type uri and resource aka.
    TypeAndResource {
        policy_type_uri: &'a str,
        resource_aka: &'a str,
    },
}

#[derive(Debug, Deserialize)]
struct PolicySettingEnvelope {
    #[serde(rename = "policySetting")]
    policy_setting: Option<PolicySetting>,
}

#[derive(Debug, Deserialize)]
struct PolicySettingMetadataEnvelope {
    #[serde(rename = "policySetting")]
    policy_setting: MetadataOnly,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MetadataOnly {
    turbot: PolicyMetadata,
}

#[derive(Debug, Deserialize)]
struct PolicySettingsEnvelope {
    #[serde(rename = "policySettings")]
    policy_settings: PolicySettingItems,
}

#[derive(Debug, Deserialize)]
struct PolicySettingItems {
    #[serde(default)]
    items: Vec<PolicySetting>,
}

#[derive(Debug, Deserialize)]
struct PolicyValueEnvelope {
    #[serde(rename = "policyValue")]
    policy_value: Option<PolicyValue>,
}

#[derive(Debug, Deserialize)]
struct PolicyValuesEnvelope {
    #[serde(rename = "policyValues")]
    policy_values: PolicyValueItems,
}

#[derive(Debug, Deserialize)]
struct PolicyValueItems {
    #[serde(default)]
    items: Vec<PolicyValue>,
}

impl TurbotClient {
    /// Creates a policy setting for `policy_type_uri` on `resource_aka`.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as
    /// `error creating policy setting: …`.
    pub async fn create_policy_setting(
        &self,
        policy_type_uri: &str,
        resource_aka: &str,
        value: Value,
        precedence: Option<&str>,
    ) -> Result<PolicyMetadata, Error> {
        let mut data = serde_json::json!({ "value": value });
        if let Some(precedence) = precedence {
            data["precedence"] = Value::String(precedence.to_string());
        }

        let command = Command {
            payload: CommandPayload {
                data,
                turbot_data: None,
            },
            meta: CommandMeta {
                type_aka: Some(policy_type_uri.to_string()),
                resource_aka: Some(resource_aka.to_string()),
                ..CommandMeta::default()
            },
        };

        let envelope: PolicySettingMetadataEnvelope = self
            .execute(
                query::create_policy_setting_mutation(),
                Some(serde_json::json!({ "command": command })),
            )
            .await
            .map_err(|e| e.context("error creating policy setting"))?;
        Ok(envelope.policy_setting.turbot)
    }

    /// Reads a policy setting by id.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as
    /// `error reading policy setting: …`.
    pub async fn read_policy_setting(&self, id: &str) -> Result<PolicySetting, Error> {
        let envelope: PolicySettingEnvelope = self
            .execute(
                &query::policy_setting_query(),
                Some(serde_json::json!({ "id": id })),
            )
            .await
            .map_err(|e| e.context("error reading policy setting"))?;
        Ok(envelope.policy_setting.unwrap_or_default())
    }

    /// Updates the policy setting identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as
    /// `error updating policy setting: …`.
    pub async fn update_policy_setting(
        &self,
        id: &str,
        value: Value,
        precedence: Option<&str>,
    ) -> Result<PolicyMetadata, Error> {
        let mut data = serde_json::json!({ "value": value });
        if let Some(precedence) = precedence {
            data["precedence"] = Value::String(precedence.to_string());
        }

        let command = Command {
            payload: CommandPayload {
                data,
                turbot_data: Some(TurbotData {
                    akas: Some(vec![id.to_string()]),
                }),
            },
            meta: CommandMeta::default(),
        };

        let envelope: PolicySettingMetadataEnvelope = self
            .execute(
                query::update_policy_setting_mutation(),
                Some(serde_json::json!({ "command": command })),
            )
            .await
            .map_err(|e| e.context("error updating policy setting"))?;
        Ok(envelope.policy_setting.turbot)
    }

    /// Deletes a policy setting by id.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as
    /// `error deleting policy setting: …`.
    pub async fn delete_policy_setting(&self, id: &str) -> Result<(), Error> {
        let command = Command {
            payload: CommandPayload {
                data: serde_json::json!({ "id": id }),
                turbot_data: None,
            },
            meta: CommandMeta::default(),
        };

        self.execute::<Value>(
            query::delete_policy_setting_mutation(),
            Some(serde_json::json!({ "command": command })),
        )
        .await
        .map_err(|e| e.context("error deleting policy setting"))?;
        Ok(())
    }

    /// Finds the default policy setting for `policy_type_uri` on
    /// `resource_aka`.
    ///
    /// Among possibly multiple returned settings, the one flagged as the
    /// default is selected. When none matches, a zero-value setting and
    /// `Ok` are returned — absence is not an error here; branch on
    /// [`PolicySetting::exists`].
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as
    /// `error finding policy setting: …`.
    pub async fn find_policy_setting(
        &self,
        policy_type_uri: &str,
        resource_aka: &str,
    ) -> Result<PolicySetting, Error> {
        let filter = format!("policyType:{policy_type_uri} resource:{resource_aka}");
        let document = query::find_policy_settings_query(&filter);

        let envelope: PolicySettingsEnvelope = self
            .execute(&document, None)
            .await
            .map_err(|e| e.context("error finding policy setting"))?;

        Ok(envelope
            .policy_settings
            .items
            .into_iter()
            .find(|setting| setting.is_default)
            .unwrap_or_default())
    }

    /// Reads a policy value.
    ///
    /// The lookup addresses the value either by id or by policy type +
    /// resource. In the latter form, a result with no matching value is a
    /// zero-value [`PolicyValue`] and `Ok`.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as
    /// `error reading policy value: …`.
    pub async fn read_policy_value(
        &self,
        lookup: PolicyValueLookup<'_>,
    ) -> Result<PolicyValue, Error> {
        match lookup {
            PolicyValueLookup::Id(id) => {
                let envelope: PolicyValueEnvelope = self
                    .execute(
                        &query::policy_value_query(),
                        Some(serde_json::json!({ "id": id })),
                    )
                    .await
                    .map_err(|e| e.context("error reading policy value"))?;
                Ok(envelope.policy_value.unwrap_or_default())
            }
            PolicyValueLookup::TypeAndResource {
                policy_type_uri,
                resource_aka,
            } => {
                let filter = format!("policyType:{policy_type_uri} resource:{resource_aka}");
                let document = query::find_policy_values_query(&filter);

                let envelope: PolicyValuesEnvelope = self
                    .execute(&document, None)
                    .await
                    .map_err(|e| e.context("error reading policy value"))?;
                Ok(envelope
                    .policy_values
                    .items
                    .into_iter()
                    .next()
                    .unwrap_or_default())
            }
        }
    }
}
