//! Remote store port (driven/secondary port)
//!
//! Interface to the remote translation store. The production adapter in
//! `lingosync-remote` talks to the store's HTTP API; tests substitute
//! in-memory fakes.
//!
//! ## Design Notes
//!
//! - Errors cross this boundary as the adapter's typed `RemoteError` wrapped
//!   in `anyhow::Error`; the engines downcast only where the taxonomy
//!   requires it (resource naming, exit codes).
//! - [`RemoteSnapshot`] is a port-level DTO: the raw fetch response, not a
//!   domain entity.

use async_trait::async_trait;

use crate::domain::TranslationSet;

/// The remote store's answer to a fetch: all translations for one branch
/// plus the list of languages configured on the space.
///
/// `languages` can name languages with no keys yet; `translations` can carry
/// keys with empty values (untranslated placeholders). Both facts matter to
/// the merge rules, so neither is normalized away here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSnapshot {
    /// Per-language combined-key → value mapping
    pub translations: TranslationSet,
    /// Languages configured on the space, in remote-reported order
    pub languages: Vec<String>,
}

/// Interface for the remote translation store
#[async_trait]
pub trait IRemoteStore: Send + Sync {
    /// Fetch the full translation snapshot for one branch.
    async fn fetch(
        &self,
        project: &str,
        space: &str,
        branch: &str,
    ) -> anyhow::Result<RemoteSnapshot>;

    /// Upload translations for one branch with create-or-update (upsert)
    /// semantics per key. Keys absent from the payload are untouched.
    async fn upload(
        &self,
        project: &str,
        space: &str,
        branch: &str,
        payload: &TranslationSet,
    ) -> anyhow::Result<()>;
}
