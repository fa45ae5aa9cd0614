//! Mod operations.
//!
//! A mod is an installable unit of policy and type definitions, identified
//! by an org/name/version triple and attached under a parent resource. Mods
//! are the one kind whose uninstall reports success in the response body:
//! a clean transport result does not guarantee the uninstall happened.

use serde::Deserialize;

use crate::client::{Error, TurbotClient};
use crate::query::{self, Command, CommandMeta, CommandPayload};
use crate::resources::ResourceMetadata;

/// An installed mod.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mod {
    /// The org component parsed from the mod uri.
    pub org: String,
    /// The mod name component parsed from the mod uri.
    pub mod_name: String,
    /// The installed version.
    pub version: String,
    /// The parent resource id.
    pub parent: String,
    /// The compound `tmod:@<org>/<mod>` uri.
    pub uri: String,
    /// Identity metadata.
    pub turbot: ResourceMetadata,
}

impl Mod {
    /// Returns true if the read found an existing mod.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.turbot.exists()
    }
}

/// The result of installing a mod: identity metadata plus the build
/// identifier reported by the server.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InstallModResult {
    pub turbot: ResourceMetadata,
    pub build: String,
}

/// Parses a compound mod uri of the form `tmod:@<org>/<mod>`.
///
/// An empty uri yields empty org and mod components with no error.
///
/// # Errors
///
/// Returns [`Error::Decode`] if a non-empty uri does not match the
/// expected form.
///
/// # Example
///
/// ```rust
/// use turbot_api::parse_mod_uri;
///
/// let (org, mod_name) = parse_mod_uri("tmod:@acme/widgets").unwrap();
/// assert_eq!(org, "acme");
/// assert_eq!(mod_name, "widgets");
///
/// assert_eq!(parse_mod_uri("").unwrap(), (String::new(), String::new()));
/// ```
pub fn parse_mod_uri(uri: &str) -> Result<(String, String), Error> {
    if uri.is_empty() {
        return Ok((String::new(), String::new()));
    }

    let invalid = || Error::Decode(format!("invalid mod uri '{uri}'"));

    let rest = uri.strip_prefix("tmod:@").ok_or_else(invalid)?;
    let (org, mod_name) = rest.split_once('/').ok_or_else(invalid)?;
    if org.is_empty() || mod_name.is_empty() || mod_name.contains('/') {
        return Err(invalid());
    }

    Ok((org.to_string(), mod_name.to_string()))
}

#[derive(Debug, Deserialize)]
struct InstallModEnvelope {
    #[serde(rename = "mod")]
    installed: InstallModResult,
}

#[derive(Debug, Deserialize)]
struct UninstallModEnvelope {
    #[serde(rename = "uninstallMod")]
    uninstall_mod: UninstallModResult,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UninstallModResult {
    success: bool,
}

/// Raw decode target for a mod read, before uri parsing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ModDetails {
    uri: String,
    version: String,
    parent: String,
    turbot: ResourceMetadata,
}

#[derive(Debug, Deserialize)]
struct ModEnvelope {
    #[serde(rename = "mod")]
    details: Option<ModDetails>,
}

impl TurbotClient {
    /// Installs a mod under `parent_aka`.
    ///
    /// Returns the created resource metadata together with the build
    /// identifier reported by the server.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as `error installing mod: …`.
    pub async fn install_mod(
        &self,
        parent_aka: &str,
        org: &str,
        mod_name: &str,
        version: &str,
    ) -> Result<InstallModResult, Error> {
        let command = Command {
            payload: CommandPayload {
                data: serde_json::json!({
                    "org": org,
                    "mod": mod_name,
                    "version": version,
                }),
                turbot_data: None,
            },
            meta: CommandMeta {
                parent_aka: Some(parent_aka.to_string()),
                ..CommandMeta::default()
            },
        };

        let envelope: InstallModEnvelope = self
            .execute(
                query::install_mod_mutation(),
                Some(serde_json::json!({ "command": command })),
            )
            .await
            .map_err(|e| e.context("error installing mod"))?;
        Ok(envelope.installed)
    }

    /// Uninstalls the mod installed at `resource_id`.
    ///
    /// Mods are uninstalled by resource id, not aka. The server reports the
    /// outcome in a `success` flag: a clean transport result with
    /// `success = false` fails with [`Error::ModUninstallFailed`].
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as `error uninstalling mod: …`,
    /// or [`Error::ModUninstallFailed`] when the server reports failure.
    pub async fn uninstall_mod(&self, resource_id: &str) -> Result<(), Error> {
        let command = Command {
            payload: CommandPayload {
                data: serde_json::json!({}),
                turbot_data: None,
            },
            meta: CommandMeta {
                resource_id: Some(resource_id.to_string()),
                ..CommandMeta::default()
            },
        };

        let envelope: UninstallModEnvelope = self
            .execute(
                query::uninstall_mod_mutation(),
                Some(serde_json::json!({ "command": command })),
            )
            .await
            .map_err(|e| e.context("error uninstalling mod"))?;

        if !envelope.uninstall_mod.success {
            return Err(Error::ModUninstallFailed);
        }
        Ok(())
    }

    /// Reads a mod by aka or id, splitting the compound uri into its org
    /// and mod components.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as `error reading mod: …`.
    pub async fn read_mod(&self, aka: &str) -> Result<Mod, Error> {
        let envelope: ModEnvelope = self
            .execute(query::mod_query(), Some(serde_json::json!({ "id": aka })))
            .await
            .map_err(|e| e.context("error reading mod"))?;

        let details = envelope.details.unwrap_or_default();
        let (org, mod_name) =
            parse_mod_uri(&details.uri).map_err(|e| e.context("error reading mod"))?;

        Ok(Mod {
            org,
            mod_name,
            version: details.version,
            parent: details.parent,
            uri: details.uri,
            turbot: details.turbot,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mod_uri_splits_org_and_mod() {
        let (org, mod_name) = parse_mod_uri("tmod:@acme/widgets").unwrap();
        assert_eq!(org, "acme");
        assert_eq!(mod_name, "widgets");
    }

    #[test]
    fn test_parse_mod_uri_empty_yields_empty_parts() {
        let (org, mod_name) = parse_mod_uri("").unwrap();
        assert_eq!(org, "");
        assert_eq!(mod_name, "");
    }

    #[test]
    fn test_parse_mod_uri_rejects_malformed_input() {
        assert!(parse_mod_uri("tmod:@acme").is_err());
        assert!(parse_mod_uri("acme/widgets").is_err());
        assert!(parse_mod_uri("tmod:@/widgets").is_err());
        assert!(parse_mod_uri("tmod:@acme/").is_err());
        assert!(parse_mod_uri("tmod:@acme/widgets/extra").is_err());
    }

    #[test]
    fn test_uninstall_result_defaults_to_failure() {
        // An empty response body must not read as success.
        let result: UninstallModResult = serde_json::from_str("{}").unwrap();
        assert!(!result.success);
    }
}
