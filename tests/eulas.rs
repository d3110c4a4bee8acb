//! EULA client tests against a wiremock Pivnet API.

mod common;

use common::{api_path, client_for};
use pivnet::EulaClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_eulas() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("/eulas")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "eulas": [
                {"id": 1, "slug": "pivotal_software_eula", "name": "Pivotal Software EULA"},
                {"id": 2, "slug": "pivotal_beta_eula", "name": "Pivotal Beta EULA"}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let eulas = client.eulas().list().await.unwrap();

    assert_eq!(eulas.len(), 2);
    assert_eq!(eulas[0].slug.as_deref(), Some("pivotal_software_eula"));
    assert_eq!(eulas[1].id, 2);
    assert!(eulas[0].content.is_none());
}

#[tokio::test]
async fn test_get_eula_with_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("/eulas/pivotal_software_eula")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 1,
            "slug": "pivotal_software_eula",
            "name": "Pivotal Software EULA",
            "content": "You agree to...",
            "_links": {"self": {"href": "https://example.com/eulas/1"}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let eula = client.eulas().get("pivotal_software_eula").await.unwrap();

    assert_eq!(eula.content.as_deref(), Some("You agree to..."));
    // Unknown relations are ignored; known ones stay absent
    assert!(eula.links.unwrap().is_empty());
}

#[tokio::test]
async fn test_accept_posts_and_decodes_acceptance() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(api_path("/products/banana/releases/1234/eula_acceptance")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "accepted_at": "2016-01-11",
            "_links": {}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let acceptance = client.eulas().accept("banana", 1234).await.unwrap();

    assert_eq!(acceptance.accepted_at.as_deref(), Some("2016-01-11"));
}

#[tokio::test]
async fn test_accept_non_200_returns_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(api_path("/products/banana/releases/1234/eula_acceptance")))
        .respond_with(ResponseTemplate::new(418))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.eulas().accept("banana", 1234).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Pivnet returned status code: 418 for the request - expected 200"
    );
}

/// Accepts writes but cannot flush them, like a closed pipe.
struct UnflushableWriter(Vec<u8>);

impl std::io::Write for UnflushableWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Err(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        ))
    }
}

#[tokio::test]
async fn test_cli_run_reports_flush_failure() {
    use pivnet::cli::{commands, Command};
    use pivnet::{PivnetError, PrintAs};

    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("/eulas")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "eulas": [{"id": 1, "slug": "pivotal_software_eula"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut out = UnflushableWriter(Vec::new());
    let err = commands::run(&client, Command::Eulas, PrintAs::Json, &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, PivnetError::OutputError(_)));
    assert!(err.to_string().contains("pipe closed"));
    assert!(!out.0.is_empty());
}
