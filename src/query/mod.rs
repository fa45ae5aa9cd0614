//! GraphQL document builders.
//!
//! Pure functions that render the query/mutation string (and the variable
//! shapes) for each API operation. No I/O happens here; the same inputs
//! always produce the same document — caller-supplied alias maps are
//! rendered in sorted alias order.
//!
//! Identifiers addressed by `$id` travel as GraphQL variables. Filter
//! expressions and akas in find queries are interpolated into the document
//! verbatim: they are trusted input, and no quoting or escaping is performed.

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Mutation command variable: what to write (`payload`) and where to route
/// it (`meta`).
#[derive(Debug, Clone, Serialize)]
pub(crate) struct Command {
    pub payload: CommandPayload,
    pub meta: CommandMeta,
}

/// The data half of a command: the properties to write, plus an optional
/// `turbotData.akas` list identifying an update target by alternate key.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommandPayload {
    pub data: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turbot_data: Option<TurbotData>,
}

/// Alternate-key identification carried inside a command payload.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TurbotData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub akas: Option<Vec<String>>,
}

/// The routing half of a command: target type, parent, or direct ids.
/// Only the fields an operation needs are serialized.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommandMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_aka: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_aka: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aka: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_aka: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart_folder_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
}

impl Command {
    /// Command for creating a resource of `type_aka` under `parent_aka`.
    pub fn create(type_aka: &str, parent_aka: &str, data: Value) -> Self {
        Self {
            payload: CommandPayload {
                data,
                turbot_data: None,
            },
            meta: CommandMeta {
                type_aka: Some(type_aka.to_string()),
                parent_aka: Some(parent_aka.to_string()),
                ..CommandMeta::default()
            },
        }
    }

    /// Command for updating the resource identified by the alternate key
    /// `aka`, carried in `payload.turbotData.akas`.
    pub fn update(type_aka: &str, parent_aka: &str, aka: &str, data: Value) -> Self {
        Self {
            payload: CommandPayload {
                data,
                turbot_data: Some(TurbotData {
                    akas: Some(vec![aka.to_string()]),
                }),
            },
            meta: CommandMeta {
                type_aka: Some(type_aka.to_string()),
                parent_aka: Some(parent_aka.to_string()),
                ..CommandMeta::default()
            },
        }
    }

    /// Command for deleting the resource addressed by `aka`. Minimal meta.
    pub fn delete(aka: &str) -> Self {
        Self {
            payload: CommandPayload {
                data: serde_json::json!({ "aka": aka }),
                turbot_data: None,
            },
            meta: CommandMeta::default(),
        }
    }
}

/// Renders one `alias: get(path: "…")` line per entry of a fixed property
/// table, in table order.
pub(crate) fn property_fragment(properties: &[(&str, &str)]) -> String {
    let mut fragment = String::new();
    for (alias, path) in properties {
        fragment.push_str("    ");
        fragment.push_str(alias);
        fragment.push_str(": get(path: \"");
        fragment.push_str(path);
        fragment.push_str("\")\n");
    }
    fragment
}

/// Renders a caller-supplied alias→path map as property accessor lines,
/// sorted by alias so identical maps yield identical documents.
pub(crate) fn sorted_property_fragment(properties: &HashMap<String, String>) -> String {
    let mut entries: Vec<(&String, &String)> = properties.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut fragment = String::new();
    for (alias, path) in entries {
        fragment.push_str("    ");
        fragment.push_str(alias);
        fragment.push_str(": get(path: \"");
        fragment.push_str(path);
        fragment.push_str("\")\n");
    }
    fragment
}

/// The `validate` introspection query.
pub(crate) const fn validation_query() -> &'static str {
    "{\n  __schema {\n    queryType {\n      name\n    }\n  }\n}"
}

/// Read query for one resource: the given property lines plus the
/// always-present metadata accessor.
pub(crate) fn resource_query(fragment: &str) -> String {
    format!(
        "query resourceQuery($id: ID!) {{\n  resource(id: $id) {{\n{fragment}    turbot: get(path: \"turbot\")\n  }}\n}}"
    )
}

/// Find query over resources matching a filter expression (kind:value
/// pairs). The filter is interpolated verbatim.
pub(crate) fn resource_list_query(filter: &str, fragment: &str) -> String {
    format!(
        "query resourceList {{\n  resources(filter: \"{filter}\") {{\n    items {{\n{fragment}      turbot: get(path: \"turbot\")\n    }}\n  }}\n}}"
    )
}

/// Create mutation for a resource kind. The operation name varies per kind;
/// routing happens through `meta.typeAka` in the command.
pub(crate) fn create_mutation(operation: &str) -> String {
    format!(
        "mutation {operation}($command: ResourceCommandInput) {{\n  resource: createResource(command: $command) {{\n    turbot: get(path: \"turbot\")\n  }}\n}}"
    )
}

/// Update (upsert) mutation for a resource kind.
pub(crate) fn update_mutation(operation: &str) -> String {
    format!(
        "mutation {operation}($command: ResourceCommandInput) {{\n  resource: updateResource(command: $command) {{\n    turbot: get(path: \"turbot\")\n  }}\n}}"
    )
}

/// Delete mutation, addressed by aka in the command payload.
pub(crate) const fn delete_mutation() -> &'static str {
    "mutation DeleteResource($command: ResourceCommandInput) {\n  resource: deleteResource(command: $command) {\n    turbot: get(path: \"turbot\")\n  }\n}"
}

/// Grant creation. The wire mutation accepts a batch of commands; the
/// facade sends exactly one and surfaces the first result item.
pub(crate) const fn create_grants_mutation() -> &'static str {
    "mutation CreateGrants($commands: [GrantCommandInput]) {\n  grants: createGrants(commands: $commands) {\n    items {\n      turbot: get(path: \"turbot\")\n    }\n  }\n}"
}

/// Grant read, addressed by grant id directly.
pub(crate) const fn grant_query() -> &'static str {
    "query grantQuery($id: ID!) {\n  grant(id: $id) {\n    turbot: get(path: \"turbot\")\n  }\n}"
}

/// Grant delete, addressed by grant id directly.
pub(crate) const fn delete_grant_mutation() -> &'static str {
    "mutation DeleteGrant($command: GrantCommandInput) {\n  grant: deleteGrant(command: $command) {\n    turbot: get(path: \"turbot\")\n  }\n}"
}

/// Mod install under a parent, addressed by org/mod/version in the payload.
pub(crate) const fn install_mod_mutation() -> &'static str {
    "mutation InstallMod($command: ModCommandInput) {\n  mod: installMod(command: $command) {\n    turbot: get(path: \"turbot\")\n    build\n  }\n}"
}

/// Mod uninstall, addressed by resource id. The response carries a success
/// flag the facade must check.
pub(crate) const fn uninstall_mod_mutation() -> &'static str {
    "mutation UninstallMod($command: ModCommandInput) {\n  uninstallMod(command: $command) {\n    success\n  }\n}"
}

/// Mod read: the compound uri plus version and metadata.
pub(crate) const fn mod_query() -> &'static str {
    "query modQuery($id: ID!) {\n  mod: resource(id: $id) {\n    uri: get(path: \"uri\")\n    version: get(path: \"version\")\n    parent: get(path: \"turbot.parentId\")\n    turbot: get(path: \"turbot\")\n  }\n}"
}

/// Smart folder read: fixed properties plus the attached resource relation.
pub(crate) const fn smart_folder_query() -> &'static str {
    "query smartFolderQuery($id: ID!) {\n  resource(id: $id) {\n    title: get(path: \"title\")\n    description: get(path: \"description\")\n    filters: get(path: \"filters\")\n    turbot: get(path: \"turbot\")\n    attachedResources {\n      items {\n        turbot: get(path: \"turbot\")\n      }\n    }\n  }\n}"
}

/// Smart folder attachment create: the mutation target is the attachment
/// relation, addressed by the two ids in meta. No typeAka/parentAka routing.
pub(crate) const fn create_smart_folder_attachment_mutation() -> &'static str {
    "mutation CreateSmartFolderAttachment($command: SmartFolderAttachmentCommandInput) {\n  attachment: createSmartFolderAttachment(command: $command) {\n    turbot: get(path: \"turbot\")\n  }\n}"
}

/// Smart folder attachment delete.
pub(crate) const fn delete_smart_folder_attachment_mutation() -> &'static str {
    "mutation DeleteSmartFolderAttachment($command: SmartFolderAttachmentCommandInput) {\n  attachment: deleteSmartFolderAttachment(command: $command) {\n    turbot: get(path: \"turbot\")\n  }\n}"
}

/// Field selection shared by policy setting reads and finds.
const POLICY_SETTING_FIELDS: &str = "      value\n      valueSource\n      template\n      precedence\n      default\n      note\n      validFromTimestamp\n      validToTimestamp\n      type {\n        uri\n      }\n      turbot {\n        id\n        resourceId\n        akas\n      }";

/// Policy setting read by id.
pub(crate) fn policy_setting_query() -> String {
    format!(
        "query policySettingQuery($id: ID!) {{\n  policySetting(id: $id) {{\n{POLICY_SETTING_FIELDS}\n  }}\n}}"
    )
}

/// Find policy settings by filter expression (interpolated verbatim).
pub(crate) fn find_policy_settings_query(filter: &str) -> String {
    format!(
        "query findPolicySettings {{\n  policySettings(filter: \"{filter}\") {{\n    items {{\n{POLICY_SETTING_FIELDS}\n    }}\n  }}\n}}"
    )
}

/// Policy setting create: routed by policy type uri + resource aka in meta.
pub(crate) const fn create_policy_setting_mutation() -> &'static str {
    "mutation CreatePolicySetting($command: PolicySettingCommandInput) {\n  policySetting: createPolicySetting(command: $command) {\n    turbot {\n      id\n      resourceId\n      akas\n    }\n  }\n}"
}

/// Policy setting update, addressed by alternate key in the payload.
pub(crate) const fn update_policy_setting_mutation() -> &'static str {
    "mutation UpdatePolicySetting($command: PolicySettingCommandInput) {\n  policySetting: updatePolicySetting(command: $command) {\n    turbot {\n      id\n      resourceId\n      akas\n    }\n  }\n}"
}

/// Policy setting delete by id.
pub(crate) const fn delete_policy_setting_mutation() -> &'static str {
    "mutation DeletePolicySetting($command: PolicySettingCommandInput) {\n  policySetting: deletePolicySetting(command: $command) {\n    turbot {\n      id\n      resourceId\n      akas\n    }\n  }\n}"
}

/// Field selection for policy value reads.
const POLICY_VALUE_FIELDS: &str = "      value\n      precedence\n      state\n      reason\n      details\n      setting {\n        value\n        precedence\n        default\n        turbot {\n          id\n          resourceId\n          akas\n        }\n      }\n      turbot {\n        id\n        resourceId\n        akas\n      }";

/// Policy value read by value id.
pub(crate) fn policy_value_query() -> String {
    format!(
        "query policyValueQuery($id: ID!) {{\n  policyValue(id: $id) {{\n{POLICY_VALUE_FIELDS}\n  }}\n}}"
    )
}

/// Find policy values by filter expression (interpolated verbatim).
pub(crate) fn find_policy_values_query(filter: &str) -> String {
    format!(
        "query findPolicyValues {{\n  policyValues(filter: \"{filter}\") {{\n    items {{\n{POLICY_VALUE_FIELDS}\n    }}\n  }}\n}}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_fragment_preserves_table_order() {
        let fragment = property_fragment(&[("title", "title"), ("description", "description")]);
        assert_eq!(
            fragment,
            "    title: get(path: \"title\")\n    description: get(path: \"description\")\n"
        );
    }

    #[test]
    fn test_sorted_property_fragment_is_deterministic() {
        let mut properties = HashMap::new();
        properties.insert("zeta".to_string(), "data.zeta".to_string());
        properties.insert("alpha".to_string(), "data.alpha".to_string());
        properties.insert("mid".to_string(), "data.mid".to_string());

        let first = sorted_property_fragment(&properties);
        let second = sorted_property_fragment(&properties);

        assert_eq!(first, second);
        assert_eq!(
            first,
            "    alpha: get(path: \"data.alpha\")\n    mid: get(path: \"data.mid\")\n    zeta: get(path: \"data.zeta\")\n"
        );
    }

    #[test]
    fn test_resource_query_includes_metadata_accessor() {
        let query = resource_query("    title: get(path: \"title\")\n");
        assert!(query.contains("resource(id: $id)"));
        assert!(query.contains("turbot: get(path: \"turbot\")"));
        assert!(query.contains("title: get(path: \"title\")"));
    }

    #[test]
    fn test_resource_list_query_interpolates_filter_verbatim() {
        let query = resource_list_query("resourceType:folder level:self", "");
        assert!(query.contains("resources(filter: \"resourceType:folder level:self\")"));
    }

    #[test]
    fn test_create_mutation_uses_operation_name() {
        let mutation = create_mutation("CreateFolder");
        assert!(mutation.starts_with("mutation CreateFolder($command: ResourceCommandInput)"));
        assert!(mutation.contains("resource: createResource(command: $command)"));
    }

    #[test]
    fn test_update_mutation_uses_operation_name() {
        let mutation = update_mutation("UpdateProfile");
        assert!(mutation.starts_with("mutation UpdateProfile($command: ResourceCommandInput)"));
        assert!(mutation.contains("resource: updateResource(command: $command)"));
    }

    #[test]
    fn test_command_create_serializes_routing_meta() {
        let command = Command::create(
            "tmod:@turbot/turbot#/resource/types/folder",
            "tmod:@acme/prod",
            serde_json::json!({ "title": "Production" }),
        );
        let value = serde_json::to_value(&command).unwrap();

        assert_eq!(
            value["meta"]["typeAka"],
            "tmod:@turbot/turbot#/resource/types/folder"
        );
        assert_eq!(value["meta"]["parentAka"], "tmod:@acme/prod");
        assert_eq!(value["payload"]["data"]["title"], "Production");
        assert!(value["payload"].get("turbotData").is_none());
    }

    #[test]
    fn test_command_update_carries_aka_in_turbot_data() {
        let command = Command::update(
            "tmod:@turbot/turbot#/resource/types/folder",
            "tmod:@acme/prod",
            "folder-aka",
            serde_json::json!({ "title": "Renamed" }),
        );
        let value = serde_json::to_value(&command).unwrap();

        assert_eq!(value["payload"]["turbotData"]["akas"][0], "folder-aka");
    }

    #[test]
    fn test_command_delete_has_minimal_meta() {
        let command = Command::delete("folder-aka");
        let value = serde_json::to_value(&command).unwrap();

        assert_eq!(value["payload"]["data"]["aka"], "folder-aka");
        assert_eq!(value["meta"], serde_json::json!({}));
    }

    #[test]
    fn test_find_policy_settings_query_interpolates_filter() {
        let query =
            find_policy_settings_query("policyType:tmod:@turbot/aws#/policy/types/region resource:arn");
        assert!(query
            .contains("policySettings(filter: \"policyType:tmod:@turbot/aws#/policy/types/region resource:arn\")"));
    }

    #[test]
    fn test_validation_query_requests_query_type_name() {
        let query = validation_query();
        assert!(query.contains("__schema"));
        assert!(query.contains("queryType"));
        assert!(query.contains("name"));
    }
}
