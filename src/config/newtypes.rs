//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear
//! error messages before any request is attempted.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Turbot access key id.
///
/// This newtype ensures the access key id is non-empty and provides type
/// safety to prevent accidental misuse of raw strings.
///
/// # Example
///
/// ```rust
/// use turbot_api::AccessKeyId;
///
/// let key = AccessKeyId::new("ac1e2b3d-access-key").unwrap();
/// assert_eq!(key.as_ref(), "ac1e2b3d-access-key");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessKeyId(String);

impl AccessKeyId {
    /// Creates a new validated access key id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessKeyId`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyAccessKeyId);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for AccessKeyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Turbot secret access key.
///
/// This newtype ensures the secret key is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `SecretAccessKey(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use turbot_api::SecretAccessKey;
///
/// let secret = SecretAccessKey::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "SecretAccessKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretAccessKey(String);

impl SecretAccessKey {
    /// Creates a new validated secret access key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySecretAccessKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptySecretAccessKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for SecretAccessKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretAccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretAccessKey(*****)")
    }
}

/// A validated Turbot workspace URL.
///
/// This newtype validates the URL shape on construction and normalizes it to
/// the workspace's GraphQL endpoint: if the path does not already end with
/// `/api/v5/graphql`, that segment is appended.
///
/// # Accepted Formats
///
/// - `https://example.turbot.com` - endpoint path appended
/// - `https://example.turbot.com/api/v5/graphql` - used as-is
///
/// # Example
///
/// ```rust
/// use turbot_api::WorkspaceUrl;
///
/// let url = WorkspaceUrl::new("https://example.turbot.com").unwrap();
/// assert_eq!(url.endpoint(), "https://example.turbot.com/api/v5/graphql");
/// assert_eq!(url.host_name(), Some("example.turbot.com"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkspaceUrl {
    endpoint: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl WorkspaceUrl {
    const GRAPHQL_PATH: &'static str = "/api/v5/graphql";

    /// Creates a new validated workspace URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWorkspaceUrl`] if the URL is malformed,
    /// with the message
    /// `failed to create client - could not parse workspace url '<url>'`.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().to_string();
        let invalid = || ConfigError::InvalidWorkspaceUrl { url: url.clone() };

        // Find scheme
        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        // Find host
        let host_start = scheme_end + 3; // Skip "://"
        if host_start >= url.len() {
            return Err(invalid());
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        if remainder.contains(char::is_whitespace) {
            return Err(invalid());
        }
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        let host = &url[host_start..host_end];
        if host.is_empty() {
            return Err(invalid());
        }

        // Normalize to the GraphQL endpoint
        let trimmed = url.trim_end_matches('/');
        let endpoint = if trimmed.ends_with(Self::GRAPHQL_PATH) {
            trimmed.to_string()
        } else {
            format!("{trimmed}{}", Self::GRAPHQL_PATH)
        };

        Ok(Self {
            endpoint,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the full GraphQL endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.endpoint[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.endpoint[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl AsRef<str> for WorkspaceUrl {
    fn as_ref(&self) -> &str {
        &self.endpoint
    }
}

impl Serialize for WorkspaceUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.endpoint)
    }
}

impl<'de> Deserialize<'de> for WorkspaceUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
