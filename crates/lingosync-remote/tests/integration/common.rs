//! Shared test helpers for remote store integration tests
//!
//! Provides wiremock-based mock server setup for the translation store API.
//! Each helper mounts the necessary mock endpoints and returns a configured
//! StoreClient pointing at the mock server.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lingosync_remote::StoreClient;

pub const TRANSLATIONS_PATH: &str =
    "/api/v1/projects/acme/spaces/web/branches/main/translations";

/// Starts a mock server and returns it with a client pointed at it.
pub async fn setup_store_mock() -> (MockServer, StoreClient) {
    let server = MockServer::start().await;
    let client = StoreClient::new(server.uri(), Some("test-token".to_string()));
    (server, client)
}

/// Mounts a fetch endpoint returning the given translations/languages body.
pub async fn mount_fetch(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(TRANSLATIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mounts an upload endpoint answering with the given status.
pub async fn mount_upload(server: &MockServer, status: u16) {
    Mock::given(method("PUT"))
        .and(path(TRANSLATIONS_PATH))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
