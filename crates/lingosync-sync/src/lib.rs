//! Lingosync Sync - Pull and sync engines
//!
//! Provides:
//! - [`TranslationDir`] - local translation file reader/writer
//! - [`ConflictResolver`] - partitions conflicts under a resolution policy
//! - [`SyncEngine`] - the pull and sync orchestrators
//! - [`SyncError`] - the engine-level error taxonomy

pub mod engine;
pub mod error;
pub mod filesystem;
pub mod resolver;

pub use engine::{PullSummary, SyncEngine, SyncSummary};
pub use error::SyncError;
pub use filesystem::TranslationDir;
pub use resolver::ConflictResolver;
