//! Configuration types for the Turbot API SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for communication with a Turbot Guardrails workspace.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`TurbotConfig`]: The configuration struct holding credentials and workspace
//! - [`TurbotConfigBuilder`]: A builder for constructing [`TurbotConfig`] instances
//! - [`AccessKeyId`]: A validated access key id newtype
//! - [`SecretAccessKey`]: A validated secret key newtype with masked debug output
//! - [`WorkspaceUrl`]: A validated workspace URL, normalized to the GraphQL endpoint
//!
//! # Example
//!
//! ```rust
//! use turbot_api::{TurbotConfig, AccessKeyId, SecretAccessKey, WorkspaceUrl};
//!
//! let config = TurbotConfig::builder()
//!     .access_key_id(AccessKeyId::new("my-access-key").unwrap())
//!     .secret_access_key(SecretAccessKey::new("my-secret-key").unwrap())
//!     .workspace(WorkspaceUrl::new("https://example.turbot.com").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{AccessKeyId, SecretAccessKey, WorkspaceUrl};

use crate::error::ConfigError;

/// Configuration for the Turbot API SDK.
///
/// This struct holds everything needed to address and authenticate against a
/// workspace: the access key pair and the workspace URL.
///
/// # Thread Safety
///
/// `TurbotConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks. It is immutable after construction.
///
/// # Example
///
/// ```rust
/// use turbot_api::{TurbotConfig, AccessKeyId, SecretAccessKey, WorkspaceUrl};
///
/// let config = TurbotConfig::builder()
///     .access_key_id(AccessKeyId::new("my-access-key").unwrap())
///     .secret_access_key(SecretAccessKey::new("my-secret-key").unwrap())
///     .workspace(WorkspaceUrl::new("https://example.turbot.com").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.workspace().host_name(), Some("example.turbot.com"));
/// ```
#[derive(Clone, Debug)]
pub struct TurbotConfig {
    access_key_id: AccessKeyId,
    secret_access_key: SecretAccessKey,
    workspace: WorkspaceUrl,
}

impl TurbotConfig {
    /// Returns a new builder for constructing a configuration.
    #[must_use]
    pub fn builder() -> TurbotConfigBuilder {
        TurbotConfigBuilder::default()
    }

    /// Returns the access key id.
    #[must_use]
    pub const fn access_key_id(&self) -> &AccessKeyId {
        &self.access_key_id
    }

    /// Returns the secret access key.
    #[must_use]
    pub const fn secret_access_key(&self) -> &SecretAccessKey {
        &self.secret_access_key
    }

    /// Returns the workspace URL.
    #[must_use]
    pub const fn workspace(&self) -> &WorkspaceUrl {
        &self.workspace
    }
}

/// Builder for [`TurbotConfig`].
///
/// All three fields are required; [`build`](Self::build) fails with
/// [`ConfigError::MissingRequiredField`] naming the first missing one.
#[derive(Debug, Default)]
pub struct TurbotConfigBuilder {
    access_key_id: Option<AccessKeyId>,
    secret_access_key: Option<SecretAccessKey>,
    workspace: Option<WorkspaceUrl>,
}

impl TurbotConfigBuilder {
    /// Sets the access key id.
    #[must_use]
    pub fn access_key_id(mut self, key: AccessKeyId) -> Self {
        self.access_key_id = Some(key);
        self
    }

    /// Sets the secret access key.
    #[must_use]
    pub fn secret_access_key(mut self, key: SecretAccessKey) -> Self {
        self.secret_access_key = Some(key);
        self
    }

    /// Sets the workspace URL.
    #[must_use]
    pub fn workspace(mut self, workspace: WorkspaceUrl) -> Self {
        self.workspace = Some(workspace);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if any required field
    /// has not been set.
    pub fn build(self) -> Result<TurbotConfig, ConfigError> {
        let access_key_id = self.access_key_id.ok_or(ConfigError::MissingRequiredField {
            field: "access_key_id",
        })?;
        let secret_access_key =
            self.secret_access_key
                .ok_or(ConfigError::MissingRequiredField {
                    field: "secret_access_key",
                })?;
        let workspace = self.workspace.ok_or(ConfigError::MissingRequiredField {
            field: "workspace",
        })?;

        Ok(TurbotConfig {
            access_key_id,
            secret_access_key,
            workspace,
        })
    }
}
