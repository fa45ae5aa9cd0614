//! Directory resource operations.
//!
//! Three directory kinds share the same operation shapes and differ only in
//! their remote type identifier and field set: local (password), Google
//! (OAuth), and SAML.

use serde::{Deserialize, Serialize};

use crate::client::{Error, TurbotClient};
use crate::resources::ResourceMetadata;

const LOCAL_DIRECTORY_TYPE_AKA: &str = "tmod:@turbot/turbot-iam#/resource/types/localDirectory";
const GOOGLE_DIRECTORY_TYPE_AKA: &str = "tmod:@turbot/turbot-iam#/resource/types/googleDirectory";
const SAML_DIRECTORY_TYPE_AKA: &str = "tmod:@turbot/turbot-iam#/resource/types/samlDirectory";

const LOCAL_DIRECTORY_PROPERTIES: &[(&str, &str)] = &[
    ("title", "title"),
    ("description", "description"),
    ("status", "status"),
    ("directoryType", "directoryType"),
    ("profileIdTemplate", "profileIdTemplate"),
];

const GOOGLE_DIRECTORY_PROPERTIES: &[(&str, &str)] = &[
    ("title", "title"),
    ("description", "description"),
    ("status", "status"),
    ("directoryType", "directoryType"),
    ("profileIdTemplate", "profileIdTemplate"),
    ("clientId", "clientID"),
    ("poolId", "poolId"),
    ("groupIdTemplate", "groupIdTemplate"),
    ("loginNameTemplate", "loginNameTemplate"),
    ("hostedName", "hostedName"),
];

const SAML_DIRECTORY_PROPERTIES: &[(&str, &str)] = &[
    ("title", "title"),
    ("description", "description"),
    ("status", "status"),
    ("directoryType", "directoryType"),
    ("profileIdTemplate", "profileIdTemplate"),
    ("entryPoint", "entryPoint"),
    ("issuer", "issuer"),
];

/// A local (password) directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalDirectory {
    pub title: String,
    pub description: String,
    pub status: String,
    pub directory_type: String,
    pub profile_id_template: String,
    pub turbot: ResourceMetadata,
}

/// A Google (OAuth) directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoogleDirectory {
    pub title: String,
    pub description: String,
    pub status: String,
    pub directory_type: String,
    pub profile_id_template: String,
    pub client_id: String,
    pub pool_id: String,
    pub group_id_template: String,
    pub login_name_template: String,
    pub hosted_name: String,
    pub turbot: ResourceMetadata,
}

/// A SAML directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SamlDirectory {
    pub title: String,
    pub description: String,
    pub status: String,
    pub directory_type: String,
    pub profile_id_template: String,
    pub entry_point: String,
    pub issuer: String,
    pub turbot: ResourceMetadata,
}

/// Writable local directory fields for create and update.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalDirectoryParams {
    pub title: String,
    pub description: String,
    pub status: String,
    pub profile_id_template: String,
}

/// Writable Google directory fields for create and update.
///
/// The client secret is write-only: it travels in the command payload and is
/// never part of a read projection.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleDirectoryParams {
    pub title: String,
    pub description: String,
    pub status: String,
    pub profile_id_template: String,
    #[serde(rename = "clientID")]
    pub client_id: String,
    pub client_secret: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_name_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosted_name: Option<String>,
}

/// Writable SAML directory fields for create and update.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SamlDirectoryParams {
    pub title: String,
    pub description: String,
    pub status: String,
    pub profile_id_template: String,
    pub entry_point: String,
    pub certificate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}

/// Serializes directory params and stamps the kind's `directoryType`.
fn directory_data<T: Serialize>(
    params: &T,
    directory_type: &str,
    context: &str,
) -> Result<serde_json::Value, Error> {
    let mut data = serde_json::to_value(params)
        .map_err(|e| Error::Decode(e.to_string()).context(context))?;
    data["directoryType"] = serde_json::Value::String(directory_type.to_string());
    Ok(data)
}

impl TurbotClient {
    /// Creates a local directory under `parent_aka`.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as
    /// `error creating local directory: …`.
    pub async fn create_local_directory(
        &self,
        parent_aka: &str,
        params: &LocalDirectoryParams,
    ) -> Result<ResourceMetadata, Error> {
        let data = directory_data(params, "local", "error creating local directory")?;
        self.create_with_type(
            "CreateLocalDirectory",
            "local directory",
            LOCAL_DIRECTORY_TYPE_AKA,
            parent_aka,
            data,
        )
        .await
    }

    /// Reads a local directory by aka or id.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as
    /// `error reading local directory: …`.
    pub async fn read_local_directory(&self, aka: &str) -> Result<LocalDirectory, Error> {
        self.read_typed("local directory", aka, LOCAL_DIRECTORY_PROPERTIES)
            .await
    }

    /// Updates the local directory identified by `aka`.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as
    /// `error updating local directory: …`.
    pub async fn update_local_directory(
        &self,
        aka: &str,
        parent_aka: &str,
        params: &LocalDirectoryParams,
    ) -> Result<ResourceMetadata, Error> {
        let data = directory_data(params, "local", "error updating local directory")?;
        self.update_with_type(
            "UpdateLocalDirectory",
            "local directory",
            LOCAL_DIRECTORY_TYPE_AKA,
            parent_aka,
            aka,
            data,
        )
        .await
    }

    /// Creates a Google directory under `parent_aka`.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as
    /// `error creating google directory: …`.
    pub async fn create_google_directory(
        &self,
        parent_aka: &str,
        params: &GoogleDirectoryParams,
    ) -> Result<ResourceMetadata, Error> {
        let data = directory_data(params, "google", "error creating google directory")?;
        self.create_with_type(
            "CreateGoogleDirectory",
            "google directory",
            GOOGLE_DIRECTORY_TYPE_AKA,
            parent_aka,
            data,
        )
        .await
    }

    /// Reads a Google directory by aka or id.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as
    /// `error reading google directory: …`.
    pub async fn read_google_directory(&self, aka: &str) -> Result<GoogleDirectory, Error> {
        self.read_typed("google directory", aka, GOOGLE_DIRECTORY_PROPERTIES)
            .await
    }

    /// Updates the Google directory identified by `aka`.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as
    /// `error updating google directory: …`.
    pub async fn update_google_directory(
        &self,
        aka: &str,
        parent_aka: &str,
        params: &GoogleDirectoryParams,
    ) -> Result<ResourceMetadata, Error> {
        let data = directory_data(params, "google", "error updating google directory")?;
        self.update_with_type(
            "UpdateGoogleDirectory",
            "google directory",
            GOOGLE_DIRECTORY_TYPE_AKA,
            parent_aka,
            aka,
            data,
        )
        .await
    }

    /// Creates a SAML directory under `parent_aka`.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as
    /// `error creating saml directory: …`.
    pub async fn create_saml_directory(
        &self,
        parent_aka: &str,
        params: &SamlDirectoryParams,
    ) -> Result<ResourceMetadata, Error> {
        let data = directory_data(params, "saml", "error creating saml directory")?;
        self.create_with_type(
            "CreateSamlDirectory",
            "saml directory",
            SAML_DIRECTORY_TYPE_AKA,
            parent_aka,
            data,
        )
        .await
    }

    /// Reads a SAML directory by aka or id.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as
    /// `error reading saml directory: …`.
    pub async fn read_saml_directory(&self, aka: &str) -> Result<SamlDirectory, Error> {
        self.read_typed("saml directory", aka, SAML_DIRECTORY_PROPERTIES)
            .await
    }

    /// Updates the SAML directory identified by `aka`.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as
    /// `error updating saml directory: …`.
    pub async fn update_saml_directory(
        &self,
        aka: &str,
        parent_aka: &str,
        params: &SamlDirectoryParams,
    ) -> Result<ResourceMetadata, Error> {
        let data = directory_data(params, "saml", "error updating saml directory")?;
        self.update_with_type(
            "UpdateSamlDirectory",
            "saml directory",
            SAML_DIRECTORY_TYPE_AKA,
            parent_aka,
            aka,
            data,
        )
        .await
    }
}
