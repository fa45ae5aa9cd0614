//! Integration tests for policy setting and policy value operations.

use serde_json::json;
use turbot_api::{PolicyValueLookup, TurbotClient};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_client(server: &MockServer) -> TurbotClient {
    TurbotClient::create("test-key", "test-secret", server.uri()).unwrap()
}

fn graphql_ok(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": data }))
}

const REGION_POLICY: &str = "tmod:@turbot/aws#/policy/types/region";

// ============================================================================
// Find Policy Setting Tests
// ============================================================================

#[tokio::test]
async fn test_find_policy_setting_selects_the_default() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v5/graphql"))
        .and(body_string_contains("policySettings(filter:"))
        .respond_with(graphql_ok(json!({
            "policySettings": {
                "items": [
                    {
                        "value": "us-east-1",
                        "default": false,
                        "turbot": { "id": "1" }
                    },
                    {
                        "value": "eu-west-1",
                        "default": true,
                        "turbot": { "id": "2", "resourceId": "17625236" }
                    },
                    {
                        "value": "ap-south-1",
                        "default": false,
                        "turbot": { "id": "3" }
                    }
                ]
            }
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let setting = client
        .find_policy_setting(REGION_POLICY, "tmod:@acme/prod")
        .await
        .unwrap();

    assert!(setting.exists());
    assert_eq!(setting.turbot.id, "2");
    assert_eq!(setting.value, json!("eu-west-1"));
}

#[tokio::test]
async fn test_find_policy_setting_no_default_returns_zero_value_ok() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v5/graphql"))
        .respond_with(graphql_ok(json!({
            "policySettings": {
                "items": [
                    { "value": "a", "default": false, "turbot": { "id": "1" } },
                    { "value": "b", "default": false, "turbot": { "id": "2" } },
                    { "value": "c", "default": false, "turbot": { "id": "3" } }
                ]
            }
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let setting = client
        .find_policy_setting(REGION_POLICY, "tmod:@acme/prod")
        .await
        .unwrap();

    // Deliberately absent, not an error
    assert!(!setting.exists());
    assert_eq!(setting.value, json!(null));
}

#[tokio::test]
async fn test_find_policy_setting_interpolates_filter() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v5/graphql"))
        .and(body_string_contains(
            "policyType:tmod:@turbot/aws#/policy/types/region resource:tmod:@acme/prod",
        ))
        .respond_with(graphql_ok(json!({ "policySettings": { "items": [] } })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client
        .find_policy_setting(REGION_POLICY, "tmod:@acme/prod")
        .await
        .unwrap();
}

// ============================================================================
// Policy Setting CRUD Tests
// ============================================================================

#[tokio::test]
async fn test_create_policy_setting_returns_metadata() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v5/graphql"))
        .and(body_string_contains("createPolicySetting"))
        .respond_with(graphql_ok(json!({
            "policySetting": {
                "turbot": { "id": "17625600", "resourceId": "17625236" }
            }
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let metadata = client
        .create_policy_setting(
            REGION_POLICY,
            "tmod:@acme/prod",
            json!("eu-west-1"),
            Some("REQUIRED"),
        )
        .await
        .unwrap();

    assert_eq!(metadata.id, "17625600");
    assert_eq!(metadata.resource_id, "17625236");
}

#[tokio::test]
async fn test_read_policy_setting_decodes_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v5/graphql"))
        .and(body_string_contains("policySetting(id: $id)"))
        .respond_with(graphql_ok(json!({
            "policySetting": {
                "value": ["us-east-1", "eu-west-1"],
                "valueSource": "settings",
                "precedence": "REQUIRED",
                "default": false,
                "type": { "uri": REGION_POLICY },
                "turbot": { "id": "17625600" }
            }
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let setting = client.read_policy_setting("17625600").await.unwrap();

    assert_eq!(setting.precedence, "REQUIRED");
    assert_eq!(setting.policy_type.uri, REGION_POLICY);
    assert_eq!(setting.value, json!(["us-east-1", "eu-west-1"]));
}

#[tokio::test]
async fn test_delete_policy_setting_succeeds() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v5/graphql"))
        .and(body_string_contains("deletePolicySetting"))
        .respond_with(graphql_ok(json!({
            "policySetting": { "turbot": { "id": "17625600" } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client.delete_policy_setting("17625600").await.unwrap();
}

// ============================================================================
// Policy Value Tests
// ============================================================================

#[tokio::test]
async fn test_read_policy_value_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v5/graphql"))
        .and(body_string_contains("policyValue(id: $id)"))
        .respond_with(graphql_ok(json!({
            "policyValue": {
                "value": "eu-west-1",
                "state": "ok",
                "turbot": { "id": "17625700", "resourceId": "17625236" }
            }
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let value = client
        .read_policy_value(PolicyValueLookup::Id("17625700"))
        .await
        .unwrap();

    assert!(value.exists());
    assert_eq!(value.state, "ok");
}

#[tokio::test]
async fn test_read_policy_value_by_type_and_resource() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v5/graphql"))
        .and(body_string_contains("policyValues(filter:"))
        .respond_with(graphql_ok(json!({
            "policyValues": {
                "items": [{
                    "value": "eu-west-1",
                    "state": "ok",
                    "setting": {
                        "value": "eu-west-1",
                        "default": true,
                        "turbot": { "id": "17625600" }
                    },
                    "turbot": { "id": "17625700" }
                }]
            }
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let value = client
        .read_policy_value(PolicyValueLookup::TypeAndResource {
            policy_type_uri: REGION_POLICY,
            resource_aka: "tmod:@acme/prod",
        })
        .await
        .unwrap();

    assert!(value.exists());
    assert!(value.setting.is_some());
}

#[tokio::test]
async fn test_read_policy_value_no_items_returns_zero_value_ok() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v5/graphql"))
        .respond_with(graphql_ok(json!({ "policyValues": { "items": [] } })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let value = client
        .read_policy_value(PolicyValueLookup::TypeAndResource {
            policy_type_uri: REGION_POLICY,
            resource_aka: "tmod:@acme/gone",
        })
        .await
        .unwrap();

    assert!(!value.exists());
}
