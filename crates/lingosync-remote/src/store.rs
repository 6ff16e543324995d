//! Remote store port implementation
//!
//! Bridges the [`IRemoteStore`] port to the HTTP [`StoreClient`]. The typed
//! [`RemoteError`](crate::RemoteError) travels inside `anyhow::Error` across
//! the port boundary; the CLI downcasts it for exit-code mapping.

use async_trait::async_trait;
use lingosync_core::domain::TranslationSet;
use lingosync_core::ports::{IRemoteStore, RemoteSnapshot};

use crate::client::StoreClient;

/// [`IRemoteStore`] adapter backed by the store's HTTP API
pub struct HttpRemoteStore {
    client: StoreClient,
}

impl HttpRemoteStore {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IRemoteStore for HttpRemoteStore {
    async fn fetch(
        &self,
        project: &str,
        space: &str,
        branch: &str,
    ) -> anyhow::Result<RemoteSnapshot> {
        let fetched = self.client.fetch_translations(project, space, branch).await?;
        Ok(RemoteSnapshot {
            translations: fetched.translations,
            languages: fetched.languages,
        })
    }

    async fn upload(
        &self,
        project: &str,
        space: &str,
        branch: &str,
        payload: &TranslationSet,
    ) -> anyhow::Result<()> {
        self.client
            .upload_translations(project, space, branch, payload)
            .await?;
        Ok(())
    }
}
