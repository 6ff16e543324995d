//! Conflict prompter port (driven/secondary port)
//!
//! Abstracts the blocking "ask the operator" side effect out of the conflict
//! resolver so the partitioning logic stays free of terminal I/O and can be
//! tested with a scripted fake.

use async_trait::async_trait;

use crate::domain::ConflictEntry;

/// The operator's answer for one conflict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictChoice {
    /// Keep the local value (it will be uploaded)
    Local,
    /// Take the remote value (it will be written locally)
    Remote,
}

/// Interface for obtaining a binary choice per conflict
///
/// Every conflict must receive an explicit answer. An implementation that
/// cannot obtain one (e.g. stdin is not a terminal) must return an error
/// rather than defaulting silently; the engine aborts the run on it.
#[async_trait]
pub trait IConflictPrompter: Send + Sync {
    async fn ask(&self, conflict: &ConflictEntry) -> anyhow::Result<ConflictChoice>;
}
