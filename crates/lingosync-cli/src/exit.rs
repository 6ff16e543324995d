//! Exit-code mapping
//!
//! Each error class gets its own exit code so scripts can react without
//! parsing messages:
//!
//! - 0: success (including "already in sync")
//! - 1: unexpected error
//! - 2: configuration error
//! - 3: remote store error
//! - 4: translation file format error
//! - 5: partial write (remote updated, local files stale)
//! - 6: conflicts present but no way to resolve them

use lingosync_core::config::ConfigError;
use lingosync_remote::RemoteError;
use lingosync_sync::SyncError;

/// Map an error to the process exit code.
///
/// Walks the error chain for the first recognized typed error; anything
/// unrecognized is a plain failure.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<SyncError>() {
            return match e {
                SyncError::Config(_) => 2,
                SyncError::Remote(_) => 3,
                SyncError::Format { .. } => 4,
                SyncError::Io { .. } => 1,
                SyncError::PartialWrite { .. } => 5,
                SyncError::Prompt(_) => 6,
            };
        }
        if cause.downcast_ref::<ConfigError>().is_some() {
            return 2;
        }
        if cause.downcast_ref::<RemoteError>().is_some() {
            return 3;
        }
    }
    1
}
