//! Error types for Turbot API operations.
//!
//! This module contains every error that can occur once a request has been
//! issued: transport failures, GraphQL error envelopes, decode failures, and
//! the semantic errors raised locally by specific operations. Construction
//! errors live in [`crate::ConfigError`].
//!
//! # Error Handling
//!
//! Transport errors are surfaced raw by the transport layer and wrapped with
//! operation context one layer up (`error creating folder: …`). Wrapping is
//! always additive: the underlying message stays in the rendered chain, which
//! is what the classification predicates below match against.
//!
//! # Example
//!
//! ```rust
//! use turbot_api::client::{is_not_found_error, Error, GraphqlErrors, GraphqlResponseError};
//!
//! let error = Error::Graphql(GraphqlErrors(vec![GraphqlResponseError {
//!     message: "Not Found".to_string(),
//! }]));
//! assert!(is_not_found_error(&error));
//! ```

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// A single error entry from a GraphQL `errors` response list.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GraphqlResponseError {
    /// The server-rendered error message.
    pub message: String,
}

/// The full GraphQL error list from one response envelope.
///
/// Displays as every message joined with `; `, so classification over the
/// rendered error string sees each server message verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphqlErrors(pub Vec<GraphqlResponseError>);

impl fmt::Display for GraphqlErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            f.write_str(&error.message)?;
            first = false;
        }
        Ok(())
    }
}

/// Error type for Turbot API operations.
///
/// # Example
///
/// ```rust,ignore
/// match client.read_folder("arn:aws:::folder/1").await {
///     Ok(folder) => println!("{}", folder.title),
///     Err(e) if is_not_found_error(&e) => println!("no such folder"),
///     Err(e) => return Err(e),
/// }
/// ```
#[derive(Debug, Error)]
pub enum Error {
    /// Network or connection error from the underlying transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint returned a non-success HTTP status.
    #[error("{message}")]
    Response {
        /// The HTTP status code of the response.
        code: u16,
        /// The raw response body.
        message: String,
    },

    /// The response carried a non-empty GraphQL `errors` list.
    #[error("{0}")]
    Graphql(GraphqlErrors),

    /// The request succeeded but the response shape could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Credential validation failed against a reachable endpoint.
    #[error("authorization failed - please verify the workspace url and credentials")]
    Authorization,

    /// A mod uninstall completed without transport errors but the server
    /// reported `success = false`.
    #[error("ran with no errors but failed to uninstall")]
    ModUninstallFailed,

    /// An operation-scoped wrapper adding context to an underlying error.
    #[error("{context}: {source}")]
    Operation {
        /// Operation description, e.g. `error creating folder`.
        context: String,
        /// The wrapped error.
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wraps this error with operation context.
    ///
    /// The rendered message becomes `<context>: <underlying>`, preserving the
    /// full underlying text for classification.
    #[must_use]
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Operation {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Returns true if the error message indicates the target was not found.
///
/// This is a pure text predicate over the rendered error chain: it matches
/// the substring `Not Found` anywhere in the message. It is contingent on
/// the server's error text remaining stable; there is no structured error
/// code on the wire.
#[must_use]
pub fn is_not_found_error(error: &Error) -> bool {
    error.to_string().contains("Not Found")
}

/// Returns true if the error message indicates a data validation failure.
///
/// Matches the substring `Data validation failed` anywhere in the rendered
/// error chain. Same stability caveat as [`is_not_found_error`].
#[must_use]
pub fn is_data_validation_error(error: &Error) -> bool {
    error.to_string().contains("Data validation failed")
}
