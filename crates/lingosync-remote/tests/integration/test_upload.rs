//! Upload endpoint tests

use lingosync_core::domain::TranslationSet;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lingosync_remote::{RemoteError, StoreClient};

use crate::common::{mount_upload, setup_store_mock, TRANSLATIONS_PATH};

#[tokio::test]
async fn test_upload_sends_expected_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(TRANSLATIONS_PATH))
        .and(body_json(serde_json::json!({
            "translations": {
                "en": {"y": "2"}
            }
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = StoreClient::new(server.uri(), None);
    let mut payload = TranslationSet::new();
    payload.insert("en", "y", "2");

    client
        .upload_translations("acme", "web", "main", &payload)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_upload_404_names_the_resource() {
    let (server, client) = setup_store_mock().await;
    mount_upload(&server, 404).await;

    let err = client
        .upload_translations("acme", "web", "main", &TranslationSet::new())
        .await
        .unwrap_err();
    match err {
        RemoteError::NotFound { resource } => assert!(resource.contains("branch 'main'")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_upload_500_is_api_error() {
    let (server, client) = setup_store_mock().await;
    mount_upload(&server, 500).await;

    let err = client
        .upload_translations("acme", "web", "main", &TranslationSet::new())
        .await
        .unwrap_err();
    assert!(matches!(err, RemoteError::Api { status: 500, .. }));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Port 1 is never listening.
    let client = StoreClient::new("http://127.0.0.1:1", None);
    let err = client
        .upload_translations("acme", "web", "main", &TranslationSet::new())
        .await
        .unwrap_err();
    assert!(matches!(err, RemoteError::Transport(_)));
}
