//! Resource metadata blocks.
//!
//! Every remote object carries a fixed identity sub-object under its
//! `turbot` key: id, lineage, alternate keys, and tags. The variants here
//! mirror the three shapes the API returns — resources, policy objects, and
//! grants. All fields default, so the empty object a read returns for a
//! missing target decodes to zero values (the basis of the existence check).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Identity metadata attached to every resource.
///
/// # Example
///
/// ```rust
/// use turbot_api::ResourceMetadata;
///
/// let metadata: ResourceMetadata = serde_json::from_str(
///     r#"{"id": "17625236", "parentId": "17625200", "akas": ["tmod:@acme/prod"]}"#,
/// )
/// .unwrap();
/// assert!(metadata.exists());
/// assert_eq!(metadata.parent_id, "17625200");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceMetadata {
    /// The resource id.
    pub id: String,
    /// The id of the parent resource.
    pub parent_id: String,
    /// Alternate keys addressing this resource.
    pub akas: Vec<String>,
    /// Tags attached to the resource.
    pub tags: HashMap<String, Value>,
}

impl ResourceMetadata {
    /// Returns true if this metadata describes an existing resource.
    ///
    /// A read against a missing target yields an empty object whose
    /// metadata decodes to zero values; a non-empty id is the only
    /// existence signal the API provides.
    #[must_use]
    pub fn exists(&self) -> bool {
        !self.id.is_empty()
    }
}

/// Identity metadata attached to policy settings and values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PolicyMetadata {
    /// The policy setting or value id.
    pub id: String,
    /// The id of the resource the policy applies to.
    pub resource_id: String,
    /// Alternate keys addressing this policy object.
    pub akas: Vec<String>,
}

impl PolicyMetadata {
    /// Returns true if this metadata describes an existing policy object.
    #[must_use]
    pub fn exists(&self) -> bool {
        !self.id.is_empty()
    }
}

/// Identity metadata attached to grants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GrantMetadata {
    /// The grant id.
    pub id: String,
    /// The profile the permission is granted to.
    pub profile_id: String,
    /// The resource the permission is granted over.
    pub resource_id: String,
    /// The granted permission type.
    pub permission_type_id: String,
    /// The granted permission level.
    pub permission_level_id: String,
}

impl GrantMetadata {
    /// Returns true if this metadata describes an existing grant.
    #[must_use]
    pub fn exists(&self) -> bool {
        !self.id.is_empty()
    }
}
