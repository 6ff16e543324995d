//! Conflict resolver
//!
//! Turns the diff's conflict list plus a [`ResolvePolicy`] into a
//! [`ResolvedPartition`]. The force policies partition without any side
//! effect; the interactive policy consults an [`IConflictPrompter`] per
//! conflict and aborts loudly when no answer can be obtained.

use std::sync::Arc;

use lingosync_core::config::ResolvePolicy;
use lingosync_core::domain::{ConflictEntry, ResolvedPartition};
use lingosync_core::ports::{ConflictChoice, IConflictPrompter};
use tracing::{debug, info};

use crate::error::SyncError;

/// Partitions conflicts into use-local and use-remote buckets
pub struct ConflictResolver {
    prompter: Arc<dyn IConflictPrompter>,
}

impl ConflictResolver {
    pub fn new(prompter: Arc<dyn IConflictPrompter>) -> Self {
        Self { prompter }
    }

    /// Resolve every conflict under the given policy.
    ///
    /// Every conflict lands in exactly one bucket; a prompter failure mid-way
    /// aborts the whole resolution (no partial partition escapes).
    pub async fn resolve(
        &self,
        policy: ResolvePolicy,
        conflicts: Vec<ConflictEntry>,
    ) -> Result<ResolvedPartition, SyncError> {
        let mut partition = ResolvedPartition::default();

        if conflicts.is_empty() {
            return Ok(partition);
        }

        debug!(count = conflicts.len(), ?policy, "resolving conflicts");

        match policy {
            ResolvePolicy::ForceLocal => partition.use_local = conflicts,
            ResolvePolicy::ForceRemote => partition.use_remote = conflicts,
            ResolvePolicy::Interactive => {
                for conflict in conflicts {
                    let choice = self
                        .prompter
                        .ask(&conflict)
                        .await
                        .map_err(SyncError::Prompt)?;
                    match choice {
                        ConflictChoice::Local => partition.use_local.push(conflict),
                        ConflictChoice::Remote => partition.use_remote.push(conflict),
                    }
                }
            }
        }

        info!(
            use_local = partition.use_local.len(),
            use_remote = partition.use_remote.len(),
            "conflicts resolved"
        );
        Ok(partition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Scripted prompter that answers from a fixed list of choices.
    struct ScriptedPrompter {
        answers: Mutex<Vec<ConflictChoice>>,
    }

    impl ScriptedPrompter {
        fn new(answers: Vec<ConflictChoice>) -> Arc<Self> {
            Arc::new(Self {
                answers: Mutex::new(answers),
            })
        }
    }

    #[async_trait]
    impl IConflictPrompter for ScriptedPrompter {
        async fn ask(&self, _conflict: &ConflictEntry) -> anyhow::Result<ConflictChoice> {
            let mut answers = self.answers.lock().unwrap();
            if answers.is_empty() {
                anyhow::bail!("no answer available");
            }
            Ok(answers.remove(0))
        }
    }

    /// Prompter that always fails, like a non-interactive terminal.
    struct FailingPrompter;

    #[async_trait]
    impl IConflictPrompter for FailingPrompter {
        async fn ask(&self, _conflict: &ConflictEntry) -> anyhow::Result<ConflictChoice> {
            anyhow::bail!("stdin is not a terminal")
        }
    }

    fn conflicts(n: usize) -> Vec<ConflictEntry> {
        (0..n)
            .map(|i| ConflictEntry {
                language: "en".to_string(),
                key: format!("key{i}"),
                local_value: format!("local{i}"),
                remote_value: format!("remote{i}"),
            })
            .collect()
    }

    #[tokio::test]
    async fn test_force_local_takes_everything() {
        let resolver = ConflictResolver::new(Arc::new(FailingPrompter));
        let partition = resolver
            .resolve(ResolvePolicy::ForceLocal, conflicts(3))
            .await
            .unwrap();
        assert_eq!(partition.use_local.len(), 3);
        assert!(partition.use_remote.is_empty());
    }

    #[tokio::test]
    async fn test_force_remote_takes_everything() {
        let resolver = ConflictResolver::new(Arc::new(FailingPrompter));
        let partition = resolver
            .resolve(ResolvePolicy::ForceRemote, conflicts(2))
            .await
            .unwrap();
        assert!(partition.use_local.is_empty());
        assert_eq!(partition.use_remote.len(), 2);
    }

    #[tokio::test]
    async fn test_interactive_follows_choices() {
        let prompter = ScriptedPrompter::new(vec![
            ConflictChoice::Local,
            ConflictChoice::Remote,
            ConflictChoice::Local,
        ]);
        let resolver = ConflictResolver::new(prompter);
        let partition = resolver
            .resolve(ResolvePolicy::Interactive, conflicts(3))
            .await
            .unwrap();
        assert_eq!(partition.use_local.len(), 2);
        assert_eq!(partition.use_remote.len(), 1);
        assert_eq!(partition.use_local[0].key, "key0");
        assert_eq!(partition.use_remote[0].key, "key1");
    }

    #[tokio::test]
    async fn test_partition_completeness() {
        for policy in [
            ResolvePolicy::ForceLocal,
            ResolvePolicy::ForceRemote,
            ResolvePolicy::Interactive,
        ] {
            let prompter = ScriptedPrompter::new(vec![
                ConflictChoice::Local,
                ConflictChoice::Remote,
                ConflictChoice::Remote,
                ConflictChoice::Local,
            ]);
            let resolver = ConflictResolver::new(prompter);
            let input = conflicts(4);
            let partition = resolver.resolve(policy, input.clone()).await.unwrap();

            assert_eq!(partition.len(), input.len());
            // No (language, key) appears in both buckets.
            for l in &partition.use_local {
                assert!(!partition
                    .use_remote
                    .iter()
                    .any(|r| r.language == l.language && r.key == l.key));
            }
        }
    }

    #[tokio::test]
    async fn test_interactive_fails_loudly_without_answers() {
        let resolver = ConflictResolver::new(Arc::new(FailingPrompter));
        let err = resolver
            .resolve(ResolvePolicy::Interactive, conflicts(1))
            .await
            .unwrap_err();
        assert!(matches!(err, SyncError::Prompt(_)));
    }

    #[tokio::test]
    async fn test_empty_conflicts_never_prompt() {
        let resolver = ConflictResolver::new(Arc::new(FailingPrompter));
        let partition = resolver
            .resolve(ResolvePolicy::Interactive, Vec::new())
            .await
            .unwrap();
        assert!(partition.is_empty());
    }
}
