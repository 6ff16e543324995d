//! Fetch endpoint tests

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lingosync_remote::{RemoteError, StoreClient};

use crate::common::{mount_fetch, setup_store_mock, TRANSLATIONS_PATH};

#[tokio::test]
async fn test_fetch_happy_path() {
    let (server, client) = setup_store_mock().await;
    mount_fetch(
        &server,
        serde_json::json!({
            "translations": {
                "en": {"common:greeting": "Hello", "title": "App"},
                "de": {"common:greeting": "Hallo", "title": ""}
            },
            "languages": ["en", "de"]
        }),
    )
    .await;

    let fetched = client
        .fetch_translations("acme", "web", "main")
        .await
        .unwrap();

    assert_eq!(fetched.languages, vec!["en", "de"]);
    assert_eq!(fetched.translations.total_keys(), 4);
    assert_eq!(fetched.translations.get("de", "common:greeting"), Some("Hallo"));
    // Empty placeholder values survive the decode untouched.
    assert_eq!(fetched.translations.get("de", "title"), Some(""));
}

#[tokio::test]
async fn test_fetch_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TRANSLATIONS_PATH))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "translations": {},
            "languages": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = StoreClient::new(server.uri(), Some("test-token".to_string()));
    client.fetch_translations("acme", "web", "main").await.unwrap();
}

#[tokio::test]
async fn test_fetch_404_names_the_branch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TRANSLATIONS_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = StoreClient::new(server.uri(), None);
    let err = client
        .fetch_translations("acme", "web", "main")
        .await
        .unwrap_err();

    match &err {
        RemoteError::NotFound { resource } => {
            assert!(resource.contains("branch 'main'"));
            assert!(resource.contains("space 'web'"));
            assert!(resource.contains("project 'acme'"));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_401_is_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TRANSLATIONS_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = StoreClient::new(server.uri(), Some("bad".to_string()));
    let err = client
        .fetch_translations("acme", "web", "main")
        .await
        .unwrap_err();
    assert!(matches!(err, RemoteError::Unauthorized { status: 401, .. }));
}

#[tokio::test]
async fn test_fetch_500_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TRANSLATIONS_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = StoreClient::new(server.uri(), None);
    let err = client
        .fetch_translations("acme", "web", "main")
        .await
        .unwrap_err();
    assert!(matches!(err, RemoteError::Api { status: 500, .. }));
}

#[tokio::test]
async fn test_fetch_garbage_body_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TRANSLATIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = StoreClient::new(server.uri(), None);
    let err = client
        .fetch_translations("acme", "web", "main")
        .await
        .unwrap_err();
    assert!(matches!(err, RemoteError::Transport(_)));
}
