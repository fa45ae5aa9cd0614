//! Typed resource operations.
//!
//! One module per resource kind, each a thin configuration of the generic
//! resource engine: a remote type identifier, a property alias→path table,
//! and a fixed decode struct. The engine owns the query building, command
//! routing, and operation-scoped error wrapping.
//!
//! # Overview
//!
//! - [`Resource`]: the schema-less open-record path
//! - [`Folder`], [`Profile`], directory kinds, [`SmartFolder`]: fixed-shape
//!   projections managed through create/read/update (deletion goes through
//!   [`TurbotClient::delete_resource`](crate::TurbotClient::delete_resource))
//! - [`Grant`], [`PolicySetting`], [`PolicyValue`], [`Mod`]: kinds with
//!   their own addressing and deviations from the common protocol

mod directory;
mod folder;
mod grant;
mod metadata;
mod policy;
mod profile;
mod resource;
mod smart_folder;
mod turbot_mod;

pub use directory::{
    GoogleDirectory, GoogleDirectoryParams, LocalDirectory, LocalDirectoryParams, SamlDirectory,
    SamlDirectoryParams,
};
pub use folder::Folder;
pub use grant::{Grant, GrantParams};
pub use metadata::{GrantMetadata, PolicyMetadata, ResourceMetadata};
pub use policy::{PolicySetting, PolicyTypeRef, PolicyValue, PolicyValueLookup};
pub use profile::{Profile, ProfileParams};
pub use resource::Resource;
pub use smart_folder::{AttachedResource, AttachedResources, SmartFolder};
pub use turbot_mod::{parse_mod_uri, InstallModResult, Mod};
