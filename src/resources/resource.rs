//! Generic resource operations.
//!
//! The schema-less read/write path every typed kind is built on. A generic
//! [`Resource`] is a fixed metadata block plus an open property map: the
//! caller names the properties to fetch (alias → dotted server path) and
//! gets their values back verbatim, whatever their type.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::client::{Error, TurbotClient};
use crate::query::{self, Command};
use crate::resources::ResourceMetadata;

/// A resource read through the generic, schema-less path.
///
/// The metadata block is always present and strictly decoded; the `data` map
/// holds one entry per requested alias that was present in the response.
/// A missing alias is simply absent from the map — never an error.
#[derive(Debug, Clone, Default)]
pub struct Resource {
    /// Identity metadata.
    pub turbot: ResourceMetadata,
    /// Requested properties, keyed by alias, values copied verbatim.
    pub data: HashMap<String, Value>,
}

impl Resource {
    /// Returns true if the read found an existing resource.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.turbot.exists()
    }
}

/// Shared decode target for mutations returning only a metadata block.
#[derive(Debug, Default, Deserialize)]
struct MetadataBlock {
    #[serde(default)]
    turbot: ResourceMetadata,
}

#[derive(Debug, Deserialize)]
struct MetadataEnvelope {
    resource: MetadataBlock,
}

/// Decode target for typed reads: `{"resource": {...}}`, where a missing
/// target may come back as null.
#[derive(Debug, Deserialize)]
struct ResourceEnvelope<T> {
    resource: Option<T>,
}

/// Decode target for list reads: `{"resources": {"items": [...]}}`.
#[derive(Debug, Deserialize)]
struct ResourceListEnvelope {
    resources: ItemsBlock,
}

#[derive(Debug, Deserialize)]
struct ItemsBlock {
    #[serde(default)]
    items: Vec<Value>,
}

/// Decodes one raw resource object into a [`Resource`].
///
/// The metadata block must decode cleanly when present (a wrong value type
/// under an expected key is a [`Error::Decode`]); requested aliases are
/// copied verbatim and missing ones are skipped.
pub(crate) fn decode_resource(
    raw: &Value,
    properties: Option<&HashMap<String, String>>,
) -> Result<Resource, Error> {
    if raw.is_null() {
        return Ok(Resource::default());
    }
    let Some(object) = raw.as_object() else {
        return Err(Error::Decode(format!(
            "expected a resource object, got: {raw}"
        )));
    };

    let turbot = match object.get("turbot") {
        None | Some(Value::Null) => ResourceMetadata::default(),
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|e| Error::Decode(format!("unexpected resource metadata shape: {e}")))?,
    };

    let mut data = HashMap::new();
    match properties {
        Some(properties) => {
            for alias in properties.keys() {
                if let Some(value) = object.get(alias) {
                    data.insert(alias.clone(), value.clone());
                }
            }
        }
        None => {
            for (key, value) in object {
                if key != "turbot" {
                    data.insert(key.clone(), value.clone());
                }
            }
        }
    }

    Ok(Resource { turbot, data })
}

impl TurbotClient {
    /// Creates a resource of `type_aka` under `parent_aka` with the given
    /// property data. `akas` optionally seeds the new resource's alternate
    /// keys through `payload.turbotData.akas`.
    ///
    /// Returns only the metadata of the created resource; re-read for a full
    /// projection.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as `error creating resource: …`.
    pub async fn create_resource(
        &self,
        type_aka: &str,
        parent_aka: &str,
        data: Value,
        akas: Option<Vec<String>>,
    ) -> Result<ResourceMetadata, Error> {
        let mut command = Command::create(type_aka, parent_aka, data);
        if akas.is_some() {
            command.payload.turbot_data = Some(crate::query::TurbotData { akas });
        }
        let document = query::create_mutation("CreateResource");

        let envelope: MetadataEnvelope = self
            .execute(&document, Some(serde_json::json!({ "command": command })))
            .await
            .map_err(|e| e.context("error creating resource"))?;
        Ok(envelope.resource.turbot)
    }

    /// Reads a resource by aka or id through the generic path.
    ///
    /// `properties` maps result aliases to dotted server-side paths; pass
    /// `None` to request only the metadata accessor.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as `error reading resource: …`.
    pub async fn read_resource(
        &self,
        aka: &str,
        properties: Option<&HashMap<String, String>>,
    ) -> Result<Resource, Error> {
        let fragment = properties.map_or_else(String::new, query::sorted_property_fragment);
        let document = query::resource_query(&fragment);

        let data: Value = self
            .execute(&document, Some(serde_json::json!({ "id": aka })))
            .await
            .map_err(|e| e.context("error reading resource"))?;

        decode_resource(&data["resource"], properties)
            .map_err(|e| e.context("error reading resource"))
    }

    /// Finds resources matching a filter expression (kind:value pairs).
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as `error listing resources: …`.
    pub async fn read_resource_list(
        &self,
        filter: &str,
        properties: Option<&HashMap<String, String>>,
    ) -> Result<Vec<Resource>, Error> {
        let fragment = properties.map_or_else(String::new, query::sorted_property_fragment);
        let document = query::resource_list_query(filter, &fragment);

        let envelope: ResourceListEnvelope = self
            .execute(&document, None)
            .await
            .map_err(|e| e.context("error listing resources"))?;

        envelope
            .resources
            .items
            .iter()
            .map(|item| decode_resource(item, properties))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| e.context("error listing resources"))
    }

    /// Updates the resource identified by the alternate key `aka`.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as `error updating resource: …`.
    pub async fn update_resource(
        &self,
        aka: &str,
        type_aka: &str,
        parent_aka: &str,
        data: Value,
    ) -> Result<ResourceMetadata, Error> {
        self.update_with_type("UpdateResource", "resource", type_aka, parent_aka, aka, data)
            .await
    }

    /// Deletes the resource addressed by `aka`.
    ///
    /// This is the deletion path for every typed resource kind as well: the
    /// typed surfaces expose create/read/update only.
    ///
    /// # Errors
    ///
    /// Returns the underlying error wrapped as `error deleting resource: …`.
    pub async fn delete_resource(&self, aka: &str) -> Result<(), Error> {
        let command = Command::delete(aka);

        self.execute::<Value>(
            query::delete_mutation(),
            Some(serde_json::json!({ "command": command })),
        )
        .await
        .map_err(|e| e.context("error deleting resource"))?;
        Ok(())
    }

    /// Returns true if a resource exists at `aka`.
    ///
    /// Reads the resource and inspects the decoded metadata id — the only
    /// existence signal the API provides.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if the read itself fails.
    pub async fn resource_exists(&self, aka: &str) -> Result<bool, Error> {
        let resource = self.read_resource(aka, Some(&HashMap::new())).await?;
        Ok(resource.exists())
    }

    /// Engine for typed create operations: per-kind operation name and error
    /// context around the shared create mutation.
    pub(crate) async fn create_with_type(
        &self,
        operation: &str,
        kind: &str,
        type_aka: &str,
        parent_aka: &str,
        data: Value,
    ) -> Result<ResourceMetadata, Error> {
        let command = Command::create(type_aka, parent_aka, data);
        let document = query::create_mutation(operation);

        let envelope: MetadataEnvelope = self
            .execute(&document, Some(serde_json::json!({ "command": command })))
            .await
            .map_err(|e| e.context(format!("error creating {kind}")))?;
        Ok(envelope.resource.turbot)
    }

    /// Engine for typed update operations.
    pub(crate) async fn update_with_type(
        &self,
        operation: &str,
        kind: &str,
        type_aka: &str,
        parent_aka: &str,
        aka: &str,
        data: Value,
    ) -> Result<ResourceMetadata, Error> {
        let command = Command::update(type_aka, parent_aka, aka, data);
        let document = query::update_mutation(operation);

        let envelope: MetadataEnvelope = self
            .execute(&document, Some(serde_json::json!({ "command": command })))
            .await
            .map_err(|e| e.context(format!("error updating {kind}")))?;
        Ok(envelope.resource.turbot)
    }

    /// Engine for typed reads: renders the kind's property table into the
    /// generic resource query and decodes the kind's fixed struct.
    pub(crate) async fn read_typed<T>(
        &self,
        kind: &str,
        aka: &str,
        properties: &[(&str, &str)],
    ) -> Result<T, Error>
    where
        T: DeserializeOwned + Default,
    {
        let fragment = query::property_fragment(properties);
        let document = query::resource_query(&fragment);

        let envelope: ResourceEnvelope<T> = self
            .execute(&document, Some(serde_json::json!({ "id": aka })))
            .await
            .map_err(|e| e.context(format!("error reading {kind}")))?;
        Ok(envelope.resource.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn properties(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(alias, path)| ((*alias).to_string(), (*path).to_string()))
            .collect()
    }

    #[test]
    fn test_decode_resource_extracts_metadata_and_properties() {
        let raw = serde_json::json!({
            "title": "Production",
            "limit": 20,
            "turbot": { "id": "17625236", "parentId": "17625200" }
        });
        let props = properties(&[("title", "title"), ("limit", "limit")]);

        let resource = decode_resource(&raw, Some(&props)).unwrap();

        assert_eq!(resource.turbot.id, "17625236");
        assert_eq!(resource.data["title"], "Production");
        assert_eq!(resource.data["limit"], 20);
    }

    #[test]
    fn test_decode_resource_missing_alias_is_absent_not_error() {
        let raw = serde_json::json!({
            "title": "Production",
            "turbot": { "id": "17625236" }
        });
        let props = properties(&[("title", "title"), ("missing", "data.missing")]);

        let resource = decode_resource(&raw, Some(&props)).unwrap();

        assert_eq!(resource.data["title"], "Production");
        assert!(!resource.data.contains_key("missing"));
    }

    #[test]
    fn test_decode_resource_bad_metadata_shape_fails() {
        // id must be a string; a number is an unexpected shape
        let raw = serde_json::json!({
            "turbot": { "id": 17625236 }
        });

        let result = decode_resource(&raw, None);

        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_decode_resource_empty_object_has_zero_metadata() {
        let raw = serde_json::json!({});

        let resource = decode_resource(&raw, Some(&properties(&[("title", "title")]))).unwrap();

        assert!(!resource.exists());
        assert!(resource.data.is_empty());
    }

    #[test]
    fn test_decode_resource_without_property_map_copies_all() {
        let raw = serde_json::json!({
            "title": "Production",
            "description": "Main environment",
            "turbot": { "id": "17625236" }
        });

        let resource = decode_resource(&raw, None).unwrap();

        assert_eq!(resource.data.len(), 2);
        assert!(!resource.data.contains_key("turbot"));
    }

    #[test]
    fn test_decode_resource_non_object_fails() {
        let raw = serde_json::json!("not an object");

        assert!(matches!(
            decode_resource(&raw, None),
            Err(Error::Decode(_))
        ));
    }
}
