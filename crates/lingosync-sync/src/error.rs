//! Error types for the pull and sync engines
//!
//! Mirrors the operator-facing taxonomy: configuration problems surface
//! before any I/O, remote problems before any local mutation, and a write
//! failure after a successful upload is its own distinct state because the
//! remote has already changed.

use std::path::PathBuf;

use lingosync_core::config::ConfigError;
use lingosync_format::FormatError;
use thiserror::Error;

/// Errors that can occur while running a pull or sync
#[derive(Debug, Error)]
pub enum SyncError {
    /// Bad or missing configuration; reported before any I/O
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The remote store failed; no local file has been touched
    #[error("remote store error: {0}")]
    Remote(#[source] anyhow::Error),

    /// A local translation file could not be parsed or serialized
    #[error("format error in {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    /// Local file I/O failed
    #[error("i/o error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Interactive resolution could not obtain an answer
    #[error("conflict resolution aborted: {0}")]
    Prompt(#[source] anyhow::Error),

    /// The upload succeeded but a local write failed afterwards: the remote
    /// already has the new data and some local files may be stale
    #[error(
        "partial sync: {uploaded} key(s) were uploaded but writing {path} failed: {source}; \
         the remote store already has the new data, local files may be stale"
    )]
    PartialWrite {
        uploaded: usize,
        path: PathBuf,
        #[source]
        source: Box<SyncError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_write_display_mentions_remote_state() {
        let inner = SyncError::Io {
            path: PathBuf::from("translations/en.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let err = SyncError::PartialWrite {
            uploaded: 3,
            path: PathBuf::from("translations/en.json"),
            source: Box::new(inner),
        };
        let msg = err.to_string();
        assert!(msg.contains("3 key(s) were uploaded"));
        assert!(msg.contains("remote store already has the new data"));
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err = SyncError::from(ConfigError::MissingProject);
        assert_eq!(err.to_string(), ConfigError::MissingProject.to_string());
    }
}
