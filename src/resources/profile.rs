//! Profile resource operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{Error, TurbotClient};
use crate::resources::ResourceMetadata;

const PROFILE_TYPE_AKA: &str = "tmod:@turbot/turbot-iam#/resource/types/profile";

const PROFILE_PROPERTIES: &[(&str, &str)] = &[
    ("title", "title"),
    ("status", "status"),
    ("email", "email"),
    ("givenName", "givenName"),
    ("familyName", "familyName"),
    ("displayName", "displayName"),
    ("directoryPoolId", "directoryPoolId"),
    ("profileId", "profileId"),
    ("lastLoginTimestamp", "lastLoginTimestamp"),
];

/// A user profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub title: String,
    pub status: String,
    pub email: String,
    pub given_name: String,
    pub family_name: String,
    pub display_name: String,
    pub directory_pool_id: String,
    pub profile_id: String,
    /// When the profile last logged in, if ever. Read-only field.
    pub last_login_timestamp: Option<DateTime<Utc>>,
    pub turbot: ResourceMetadata,
}

/// Writable profile fields for create and update.
///
/// Optional fields are omitted from the command payload entirely when unset.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileParams {
    pub title: String,
    pub email: String,
    pub status: String,
    pub display_name: String,
    pub given_name: String,
    pub family_name: String,
    pub profile_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_pool_id: Option<String>,
}

impl TurbotClient {
    /// Creates a profile under `parent_aka` (its directory).
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as `error creating profile: …`.
    pub async fn create_profile(
        &self,
        parent_aka: &str,
        params: &ProfileParams,
    ) -> Result<ResourceMetadata, Error> {
        let data = serde_json::to_value(params)
            .map_err(|e| Error::Decode(e.to_string()).context("error creating profile"))?;
        self.create_with_type(
            "CreateProfile",
            "profile",
            PROFILE_TYPE_AKA,
            parent_aka,
            data,
        )
        .await
    }

    /// Reads a profile by aka or id.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as `error reading profile: …`.
    pub async fn read_profile(&self, aka: &str) -> Result<Profile, Error> {
        self.read_typed("profile", aka, PROFILE_PROPERTIES).await
    }

    /// Updates the profile identified by `aka`.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as `error updating profile: …`.
    pub async fn update_profile(
        &self,
        aka: &str,
        parent_aka: &str,
        params: &ProfileParams,
    ) -> Result<ResourceMetadata, Error> {
        let data = serde_json::to_value(params)
            .map_err(|e| Error::Decode(e.to_string()).context("error updating profile"))?;
        self.update_with_type(
            "UpdateProfile",
            "profile",
            PROFILE_TYPE_AKA,
            parent_aka,
            aka,
            data,
        )
        .await
    }
}
