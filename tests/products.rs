//! Product client tests against a wiremock Pivnet API.

mod common;

use common::{api_path, client_for};
use pivnet::{ClientConfig, PivnetClient, PivnetError, ProductClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_product() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("/products/banana")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 5,
            "slug": "banana",
            "name": "Banana"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let product = client.products().get("banana").await.unwrap();

    assert_eq!(product.id, 5);
    assert_eq!(product.slug, "banana");
    assert_eq!(product.name.as_deref(), Some("Banana"));
}

#[tokio::test]
async fn test_list_products() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("/products")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "products": [{"id": 1, "slug": "a"}, {"id": 2, "slug": "b"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let products = client.products().list().await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[1].slug, "b");
    assert!(products[0].name.is_none());
}

#[tokio::test]
async fn test_error_message_from_error_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("/products/missing")))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"error": "not found"})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.products().get("missing").await.unwrap_err();

    match err {
        PivnetError::UnexpectedStatus {
            status_code,
            expected_status_code,
            message,
        } => {
            assert_eq!(status_code, 404);
            assert_eq!(expected_status_code, 200);
            assert_eq!(message.as_deref(), Some("not found"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop a listener so the port is closed.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = PivnetClient::new(ClientConfig::new("token").with_endpoint(endpoint)).unwrap();
    let err = client.products().get("banana").await.unwrap_err();

    assert!(matches!(err, PivnetError::HttpError(_)));
    assert_eq!(err.status_code(), None);
}
