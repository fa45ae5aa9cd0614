//! # Turbot API Rust SDK
//!
//! A Rust SDK for the Turbot Guardrails API, providing typed create, read,
//! update, and delete operations over the workspace's single GraphQL
//! endpoint with basic authentication.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`TurbotConfig`] and [`TurbotConfigBuilder`]
//! - Validated newtypes for credentials and the workspace URL
//! - An immutable, shareable [`TurbotClient`] bound to one workspace
//! - Typed operations for folders, directories, profiles, policies, grants,
//!   mods, and smart folders
//! - A generic, schema-less resource path for ad hoc property sets
//! - Text-match error classification for not-found and validation failures
//!
//! ## Quick Start
//!
//! ```rust
//! use turbot_api::TurbotClient;
//!
//! let client = TurbotClient::create(
//!     "your-access-key-id",
//!     "your-secret-access-key",
//!     "https://example.turbot.com",
//! )
//! .unwrap();
//! ```
//!
//! ## Reading and Writing Resources
//!
//! ```rust,ignore
//! use turbot_api::TurbotClient;
//!
//! let client = TurbotClient::create(key, secret, workspace)?;
//!
//! // Verify the workspace and credentials before doing real work
//! client.validate().await?;
//!
//! // Create a folder, then read it back
//! let metadata = client
//!     .create_folder("tmod:@acme/prod", "Production", "Main environment")
//!     .await?;
//! let folder = client.read_folder(&metadata.id).await?;
//! assert_eq!(folder.title, "Production");
//!
//! // Typed kinds delete through the generic resource path
//! client.delete_resource(&metadata.id).await?;
//! ```
//!
//! ## Generic Resources
//!
//! When a fixed schema does not fit, name the properties to fetch and get
//! their values back verbatim:
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//!
//! let mut properties = HashMap::new();
//! properties.insert("title".to_string(), "title".to_string());
//! properties.insert("limit".to_string(), "metadata.limit".to_string());
//!
//! let resource = client.read_resource("tmod:@acme/prod", Some(&properties)).await?;
//! if resource.exists() {
//!     println!("title: {:?}", resource.data.get("title"));
//! }
//! ```
//!
//! ## Error Classification
//!
//! The server reports failures as message text, not structured codes. Two
//! predicates classify the rendered message for callers that branch on
//! create-vs-update or retry logic:
//!
//! ```rust,ignore
//! use turbot_api::{is_not_found_error, is_data_validation_error};
//!
//! match client.read_folder(id).await {
//!     Err(e) if is_not_found_error(&e) => create_instead(),
//!     other => other?,
//! };
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the client is constructed explicitly and passed
//!   by reference
//! - **Fail-fast validation**: credentials and the workspace URL validate
//!   on construction, before any request
//! - **Thread-safe**: the client is `Send + Sync` and immutable; callers
//!   own any parallelism
//! - **One round-trip per call**: no caching, retries, or batching

pub mod client;
pub mod config;
pub mod error;
mod query;
pub mod resources;

// Re-export public types at crate root for convenience
pub use client::{
    is_data_validation_error, is_not_found_error, Error, GraphqlErrors, GraphqlResponseError,
    TurbotClient,
};
pub use config::{AccessKeyId, SecretAccessKey, TurbotConfig, TurbotConfigBuilder, WorkspaceUrl};
pub use error::ConfigError;

// Re-export resource types
pub use resources::{
    parse_mod_uri, AttachedResource, AttachedResources, Folder, GoogleDirectory,
    GoogleDirectoryParams, Grant, GrantMetadata, GrantParams, InstallModResult, LocalDirectory,
    LocalDirectoryParams, Mod, PolicyMetadata, PolicySetting, PolicyTypeRef, PolicyValue,
    PolicyValueLookup, Profile, ProfileParams, Resource, ResourceMetadata, SamlDirectory,
    SamlDirectoryParams, SmartFolder,
};
