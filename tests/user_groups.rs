//! User group client tests against a wiremock Pivnet API.

mod common;

use common::{api_path, client_for};
use pivnet::{PivnetError, UserGroupClient};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_for_release_returns_groups_in_order() {
    let mock_server = MockServer::start().await;

    let response = r#"{"user_groups": [{"id":2,"name":"group 1"},{"id": 3, "name": "group 2"}]}"#;

    Mock::given(method("GET"))
        .and(path(api_path("/products/banana/releases/1234/user_groups")))
        .respond_with(ResponseTemplate::new(200).set_body_string(response))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let groups = client
        .user_groups()
        .list_for_release("banana", 1234)
        .await
        .unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].id, 2);
    assert_eq!(groups[0].name, "group 1");
    assert_eq!(groups[1].id, 3);
    assert_eq!(groups[1].name, "group 2");
}

#[tokio::test]
async fn test_list_for_release_non_200_returns_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("/products/banana/releases/1234/user_groups")))
        .respond_with(ResponseTemplate::new(418))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .user_groups()
        .list_for_release("banana", 1234)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Pivnet returned status code: 418 for the request - expected 200"
    );
}

#[tokio::test]
async fn test_list_all_user_groups() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("/user_groups")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user_groups": [{
                "id": 9,
                "name": "partners",
                "description": "partner access",
                "members": ["a@example.com", "b@example.com"]
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let groups = client.user_groups().list().await.unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].description.as_deref(), Some("partner access"));
    assert_eq!(groups[0].members, vec!["a@example.com", "b@example.com"]);
}

#[tokio::test]
async fn test_add_to_release_204_returns_ok() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(api_path("/products/banana-slug/releases/2345/add_user_group")))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({"user_group": {"id": 3456}})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .user_groups()
        .add_to_release("banana-slug", 2345, 3456)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_add_to_release_non_204_returns_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(api_path("/products/banana-slug/releases/2345/add_user_group")))
        .respond_with(ResponseTemplate::new(418))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .user_groups()
        .add_to_release("banana-slug", 2345, 3456)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Pivnet returned status code: 418 for the request - expected 204"
    );
}

#[tokio::test]
async fn test_add_to_release_200_is_still_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(api_path("/products/banana-slug/releases/2345/add_user_group")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .user_groups()
        .add_to_release("banana-slug", 2345, 3456)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PivnetError::UnexpectedStatus {
            status_code: 200,
            expected_status_code: 204,
            ..
        }
    ));
}

#[tokio::test]
async fn test_remove_from_release_204_returns_ok() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(api_path("/products/banana-slug/releases/2345/remove_user_group")))
        .and(body_json(serde_json::json!({"user_group": {"id": 3456}})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .user_groups()
        .remove_from_release("banana-slug", 2345, 3456)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_remove_from_release_error_carries_server_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(api_path("/products/banana-slug/releases/2345/remove_user_group")))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(serde_json::json!({"message": "user group not attached"})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .user_groups()
        .remove_from_release("banana-slug", 2345, 3456)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Pivnet returned status code: 422 for the request - expected 204: user group not attached"
    );
}
