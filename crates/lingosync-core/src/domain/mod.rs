//! Domain model for translation synchronization
//!
//! Pure data types and algorithms with no I/O:
//! - [`key`] - combined `namespace:key` addressing
//! - [`translation`] - translation sets and diff/partition value types
//! - [`diff`] - the structural diff engine
//! - [`merge`] - named merge strategies for pull and sync

pub mod diff;
pub mod key;
pub mod merge;
pub mod translation;

pub use diff::compute_diff;
pub use key::NamespacedKey;
pub use merge::{MergeDecision, MergeStrategy, PullMerge, SyncMerge};
pub use translation::{
    ConflictEntry, DiffResult, Entry, LanguageMap, ResolvedPartition, TranslationSet,
};
