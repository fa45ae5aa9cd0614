//! Error types for SDK configuration.
//!
//! This module contains the construction-time error type. Everything that can
//! fail once a request has been issued lives in [`crate::client::Error`].
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation: a client with an unparsable workspace URL is never
//! constructed, so no request is ever attempted against it.
//!
//! # Example
//!
//! ```rust
//! use turbot_api::{AccessKeyId, ConfigError};
//!
//! let result = AccessKeyId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessKeyId)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant carries a clear, actionable message. These errors are
/// returned before any network activity takes place.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access key id cannot be empty.
    #[error("access key id cannot be empty. Please provide a valid Turbot access key id.")]
    EmptyAccessKeyId,

    /// Secret access key cannot be empty.
    #[error("secret access key cannot be empty. Please provide a valid Turbot secret access key.")]
    EmptySecretAccessKey,

    /// Workspace URL could not be parsed.
    #[error("failed to create client - could not parse workspace url '{url}'")]
    InvalidWorkspaceUrl {
        /// The URL that failed to parse.
        url: String,
    },

    /// A required field is missing from the builder.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
