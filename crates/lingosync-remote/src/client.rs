//! Translation store API client
//!
//! Typed HTTP client for the remote translation store's REST API. Handles
//! bearer authentication, endpoint construction, JSON decoding, and the
//! mapping from HTTP status codes to [`RemoteError`].

use lingosync_core::domain::TranslationSet;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RemoteError;

/// Wire shape of `GET .../translations`
#[derive(Debug, Deserialize)]
pub struct FetchResponse {
    /// Per-language combined-key → value mapping
    pub translations: TranslationSet,
    /// Languages configured on the space
    pub languages: Vec<String>,
}

/// Wire shape of the upload body
#[derive(Debug, Serialize)]
struct UploadBody<'a> {
    translations: &'a TranslationSet,
}

/// HTTP client for the translation store API
///
/// Wraps `reqwest::Client` with the store's base URL and an optional bearer
/// token. Construct with a mock server URL in tests.
pub struct StoreClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl StoreClient {
    /// Creates a client for the given base URL.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
            token,
        }
    }

    /// Base URL of the store this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Creates a request builder for the given method and API path,
    /// attaching the bearer token when one is configured.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.client.request(method, &url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn translations_path(project: &str, space: &str, branch: &str) -> String {
        format!("/api/v1/projects/{project}/spaces/{space}/branches/{branch}/translations")
    }

    fn resource_label(project: &str, space: &str, branch: &str) -> String {
        format!("branch '{branch}' in space '{space}' of project '{project}'")
    }

    /// Fetch all translations for one branch.
    pub async fn fetch_translations(
        &self,
        project: &str,
        space: &str,
        branch: &str,
    ) -> Result<FetchResponse, RemoteError> {
        let path = Self::translations_path(project, space, branch);
        debug!(%path, "fetching translations");

        let response = self
            .request(Method::GET, &path)
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        let response = check_status(response, &Self::resource_label(project, space, branch))?;

        let fetched: FetchResponse = response
            .json()
            .await
            .map_err(|e| RemoteError::Transport(format!("undecodable fetch response: {e}")))?;

        debug!(
            languages = fetched.languages.len(),
            keys = fetched.translations.total_keys(),
            "fetch complete"
        );
        Ok(fetched)
    }

    /// Upload translations for one branch (per-key upsert).
    pub async fn upload_translations(
        &self,
        project: &str,
        space: &str,
        branch: &str,
        payload: &TranslationSet,
    ) -> Result<(), RemoteError> {
        let path = Self::translations_path(project, space, branch);
        debug!(%path, keys = payload.total_keys(), "uploading translations");

        let response = self
            .request(Method::PUT, &path)
            .json(&UploadBody {
                translations: payload,
            })
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        check_status(response, &Self::resource_label(project, space, branch))?;
        debug!("upload complete");
        Ok(())
    }
}

/// Map non-success status codes into the error taxonomy.
fn check_status(response: Response, resource: &str) -> Result<Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(match status {
        StatusCode::NOT_FOUND => RemoteError::NotFound {
            resource: resource.to_string(),
        },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => RemoteError::Unauthorized {
            resource: resource.to_string(),
            status: status.as_u16(),
        },
        _ => RemoteError::Api {
            resource: resource.to_string(),
            status: status.as_u16(),
        },
    })
}
