//! Named merge strategies
//!
//! Pull and sync apply different rules when both sides carry a value. Each
//! rule is a named [`MergeStrategy`] implementation rather than an inline
//! conditional, so its invariants can be unit-tested in isolation.

/// Outcome of merging one `(language, key)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeDecision {
    /// Keep the local value
    UseLocal,
    /// Take the remote value
    UseRemote,
    /// Keep the local value because the remote reported an empty placeholder
    /// (counted separately so pull can report preservation)
    Preserved,
    /// Both sides carry differing values; an explicit resolution is required
    Conflict,
    /// Equal on both sides or absent from both; nothing to do
    Drop,
}

/// A rule deciding the winner for one key across the two sides
///
/// `local`/`remote` are `None` when the side does not carry the key at all;
/// absence is distinct from an empty string.
pub trait MergeStrategy {
    fn resolve(&self, local: Option<&str>, remote: Option<&str>) -> MergeDecision;
}

/// Pull's merge rule: the remote is authoritative with one override.
///
/// An empty remote value does not clobber a non-empty local value; the local
/// edit survives and is counted as preserved. Every other remote value wins.
/// Keys the remote never reported are dropped — preservation requires the
/// remote to at least report the key with an empty value.
#[derive(Debug, Clone, Copy, Default)]
pub struct PullMerge;

impl MergeStrategy for PullMerge {
    fn resolve(&self, local: Option<&str>, remote: Option<&str>) -> MergeDecision {
        match (local, remote) {
            (Some(l), Some("")) if !l.is_empty() => MergeDecision::Preserved,
            (_, Some(_)) => MergeDecision::UseRemote,
            (_, None) => MergeDecision::Drop,
        }
    }
}

/// Sync's merge rule: surface every difference instead of picking a winner.
///
/// One-sided keys travel to the other side (local-only uploads, remote-only
/// downloads); differing values on both sides are conflicts for the resolver;
/// equal values need no action. The diff engine classifies with this rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncMerge;

impl MergeStrategy for SyncMerge {
    fn resolve(&self, local: Option<&str>, remote: Option<&str>) -> MergeDecision {
        match (local, remote) {
            (Some(_), None) => MergeDecision::UseLocal,
            (None, Some(_)) => MergeDecision::UseRemote,
            (Some(l), Some(r)) if l != r => MergeDecision::Conflict,
            _ => MergeDecision::Drop,
        }
    }
}
