//! Product file client tests against a wiremock Pivnet API.

mod common;

use common::{api_path, client_for};
use pivnet::ProductFileClient;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn product_file_json(id: u64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "file_type": "Software",
        "file_version": "1.0",
        "aws_object_url": format!("https://s3.example.com/{name}"),
        "md5": "d41d8cd98f00b204e9800998ecf8427e",
        "_links": {"download": {"href": format!("https://example.com/{id}/download")}}
    })
}

#[tokio::test]
async fn test_list_product_files() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("/products/banana/product_files")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "product_files": [product_file_json(10, "a.tgz"), product_file_json(11, "b.tgz")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let files = client.product_files().list("banana").await.unwrap();

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].name.as_deref(), Some("a.tgz"));
    assert_eq!(
        files[1].links.as_ref().and_then(|l| l.download_href()),
        Some("https://example.com/11/download")
    );
}

#[tokio::test]
async fn test_list_for_release() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("/products/banana/releases/1234/product_files")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "product_files": [product_file_json(10, "a.tgz")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let files = client
        .product_files()
        .list_for_release("banana", 1234)
        .await
        .unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].id, 10);
}

#[tokio::test]
async fn test_get_unwraps_product_file() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("/products/banana/product_files/10")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "product_file": product_file_json(10, "a.tgz")
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let file = client.product_files().get("banana", 10).await.unwrap();

    assert_eq!(file.id, 10);
    assert_eq!(file.md5.as_deref(), Some("d41d8cd98f00b204e9800998ecf8427e"));
}

#[tokio::test]
async fn test_add_and_remove_from_release() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(api_path("/products/banana/releases/1234/add_product_file")))
        .and(body_json(serde_json::json!({"product_file": {"id": 10}})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .and(path(api_path("/products/banana/releases/1234/remove_product_file")))
        .and(body_json(serde_json::json!({"product_file": {"id": 10}})))
        .respond_with(ResponseTemplate::new(418))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .product_files()
        .add_to_release("banana", 1234, 10)
        .await
        .unwrap();

    let err = client
        .product_files()
        .remove_from_release("banana", 1234, 10)
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Pivnet returned status code: 418 for the request - expected 204"
    );
}
