//! Pull and sync orchestrators
//!
//! The [`SyncEngine`] sequences the two command flows over the remote store
//! port, the local translation directory, and the conflict resolver:
//!
//! - **pull**: fetch → read local → merge (remote authoritative, local
//!   preservation override) → write
//! - **sync**: fetch → read local → diff → resolve (when conflicts exist) →
//!   upload → apply downloads → write touched languages
//!
//! Stages run strictly in sequence; each one is fully awaited before the
//! next begins, so no stage ever observes a half-updated set.
//!
//! ## Failure semantics
//!
//! The fetch always happens first, so a remote failure aborts before any
//! local file is touched. A local write failure after a successful upload is
//! reported as [`SyncError::PartialWrite`]: the remote already has the new
//! data and the operator must know that. Write-back is atomic per file, not
//! across languages; an interrupt can leave earlier languages updated and
//! later ones stale.

use std::collections::BTreeSet;
use std::sync::Arc;

use lingosync_core::config::ResolvedOptions;
use lingosync_core::domain::{
    compute_diff, LanguageMap, MergeDecision, MergeStrategy, PullMerge, TranslationSet,
};
use lingosync_core::ports::{IConflictPrompter, IRemoteStore};
use lingosync_format::{formatter_for, FilePattern, Formatter};
use tracing::{debug, info};

use crate::error::SyncError;
use crate::filesystem::TranslationDir;
use crate::resolver::ConflictResolver;

/// Summary of a completed pull
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullSummary {
    /// Languages written to disk
    pub languages_written: u32,
    /// Total keys written across all languages
    pub keys_written: u32,
    /// Local values kept over empty remote placeholders
    pub preserved: u32,
}

/// Summary of a completed sync
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncSummary {
    /// Keys uploaded to the remote store
    pub uploaded: u32,
    /// Keys merged into local files from the remote
    pub downloaded: u32,
    /// Conflicts resolved in favor of the local value
    pub resolved_local: u32,
    /// Conflicts resolved in favor of the remote value
    pub resolved_remote: u32,
    /// Local values kept over empty remote placeholders; sync surfaces those
    /// as conflicts for explicit resolution instead of preserving silently,
    /// so this stays zero
    pub preserved: u32,
    /// True when nothing differed and no I/O was performed
    pub in_sync: bool,
}

/// Orchestrates the pull and sync flows for one invocation
pub struct SyncEngine {
    remote: Arc<dyn IRemoteStore>,
    resolver: ConflictResolver,
    opts: ResolvedOptions,
}

impl SyncEngine {
    pub fn new(
        remote: Arc<dyn IRemoteStore>,
        prompter: Arc<dyn IConflictPrompter>,
        opts: ResolvedOptions,
    ) -> Self {
        Self {
            remote,
            resolver: ConflictResolver::new(prompter),
            opts,
        }
    }

    fn formatter(&self) -> Box<dyn Formatter> {
        formatter_for(self.opts.format, self.opts.nested, self.opts.indent)
    }

    fn translation_dir(&self) -> Result<TranslationDir, SyncError> {
        let pattern = FilePattern::new(&self.opts.file_pattern).map_err(|_| {
            SyncError::Config(lingosync_core::config::ConfigError::InvalidPattern(
                self.opts.file_pattern.clone(),
            ))
        })?;
        Ok(TranslationDir::new(self.opts.dir.clone(), pattern))
    }

    /// Pull: overwrite local files from the remote, preserving non-empty
    /// local values where the remote reports an empty placeholder.
    ///
    /// Only keys the remote reports make it into the output; a key that is
    /// present locally but entirely absent from the remote response is
    /// dropped. Preservation requires the remote to at least report the key
    /// with an empty value.
    pub async fn pull(&self) -> Result<PullSummary, SyncError> {
        let o = &self.opts;
        info!(project = %o.project, space = %o.space, branch = %o.branch, "starting pull");

        let snapshot = self
            .remote
            .fetch(&o.project, &o.space, &o.branch)
            .await
            .map_err(SyncError::Remote)?;

        let formatter = self.formatter();
        let dir = self.translation_dir()?;
        let local = dir.read_all(formatter.as_ref()).await?;

        let mut summary = PullSummary::default();

        for lang in &snapshot.languages {
            if let Some(filter) = &o.lang {
                if filter != lang {
                    continue;
                }
            }

            let empty = LanguageMap::new();
            let remote_map = snapshot.translations.language(lang).unwrap_or(&empty);

            let mut merged = LanguageMap::new();
            for (key, remote_value) in remote_map {
                match PullMerge.resolve(local.get(lang, key), Some(remote_value)) {
                    MergeDecision::Preserved => {
                        // Safe: Preserved only fires when the local value exists.
                        if let Some(local_value) = local.get(lang, key) {
                            merged.insert(key.clone(), local_value.to_string());
                            summary.preserved += 1;
                        }
                    }
                    MergeDecision::UseRemote => {
                        merged.insert(key.clone(), remote_value.clone());
                    }
                    _ => {}
                }
            }

            debug!(lang, keys = merged.len(), "writing merged language");
            summary.keys_written += merged.len() as u32;
            dir.write_language(lang, &merged, formatter.as_ref()).await?;
            summary.languages_written += 1;
        }

        info!(
            languages = summary.languages_written,
            keys = summary.keys_written,
            preserved = summary.preserved,
            "pull complete"
        );
        Ok(summary)
    }

    /// Sync: exchange differences with the remote store.
    ///
    /// Uploads local-only keys plus conflicts resolved in favor of local;
    /// merges remote-only keys plus conflicts resolved in favor of remote
    /// into the local files. Languages without downloads are not rewritten.
    pub async fn sync(&self) -> Result<SyncSummary, SyncError> {
        let o = &self.opts;
        info!(project = %o.project, space = %o.space, branch = %o.branch, "starting sync");

        let snapshot = self
            .remote
            .fetch(&o.project, &o.space, &o.branch)
            .await
            .map_err(SyncError::Remote)?;

        let formatter = self.formatter();
        let dir = self.translation_dir()?;
        let mut local = dir.read_all(formatter.as_ref()).await?;

        let diff = compute_diff(&local, &snapshot.translations);

        if diff.is_empty() {
            info!("already in sync, nothing to do");
            return Ok(SyncSummary {
                in_sync: true,
                ..SyncSummary::default()
            });
        }

        debug!(
            local_only = diff.local_only.len(),
            remote_only = diff.remote_only.len(),
            conflicts = diff.conflicts.len(),
            "diff computed"
        );

        let partition = self.resolver.resolve(o.policy, diff.conflicts).await?;

        // Upload: local-only keys plus conflicts where local wins.
        let mut payload = TranslationSet::new();
        for entry in &diff.local_only {
            payload.insert(&entry.language, entry.key.clone(), entry.value.clone());
        }
        for conflict in &partition.use_local {
            payload.insert(
                &conflict.language,
                conflict.key.clone(),
                conflict.local_value.clone(),
            );
        }

        let uploaded = payload.total_keys();
        if uploaded > 0 {
            self.remote
                .upload(&o.project, &o.space, &o.branch, &payload)
                .await
                .map_err(SyncError::Remote)?;
            info!(keys = uploaded, "uploaded local changes");
        }

        // Download: remote-only keys plus conflicts where remote wins,
        // merged into the local set. Only touched languages are rewritten.
        let mut touched: BTreeSet<String> = BTreeSet::new();
        let mut downloaded = 0u32;

        for entry in &diff.remote_only {
            local.insert(&entry.language, entry.key.clone(), entry.value.clone());
            touched.insert(entry.language.clone());
            downloaded += 1;
        }
        for conflict in &partition.use_remote {
            local.insert(
                &conflict.language,
                conflict.key.clone(),
                conflict.remote_value.clone(),
            );
            touched.insert(conflict.language.clone());
            downloaded += 1;
        }

        for lang in &touched {
            let empty = LanguageMap::new();
            let mapping = local.language(lang).unwrap_or(&empty);
            if let Err(e) = dir.write_language(lang, mapping, formatter.as_ref()).await {
                // The remote is already updated; this is not a uniform failure.
                if uploaded > 0 {
                    let path = match &e {
                        SyncError::Io { path, .. } | SyncError::Format { path, .. } => {
                            path.clone()
                        }
                        _ => o.dir.clone(),
                    };
                    return Err(SyncError::PartialWrite {
                        uploaded,
                        path,
                        source: Box::new(e),
                    });
                }
                return Err(e);
            }
        }

        let summary = SyncSummary {
            uploaded: uploaded as u32,
            downloaded,
            resolved_local: partition.use_local.len() as u32,
            resolved_remote: partition.use_remote.len() as u32,
            preserved: 0,
            in_sync: false,
        };
        info!(
            uploaded = summary.uploaded,
            downloaded = summary.downloaded,
            resolved_local = summary.resolved_local,
            resolved_remote = summary.resolved_remote,
            "sync complete"
        );
        Ok(summary)
    }
}
