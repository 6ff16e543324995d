//! Error types for remote store interactions

use thiserror::Error;

/// Errors that can occur while talking to the remote translation store
///
/// Every variant names what it can so the operator sees the offending
/// resource, not just a status code.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The named project/space/branch does not exist on the store
    #[error("not found: {resource}")]
    NotFound { resource: String },

    /// The token was rejected (401) or lacks permission (403)
    #[error("authentication failed for {resource} (HTTP {status})")]
    Unauthorized { resource: String, status: u16 },

    /// Any other 4xx/5xx from the store
    #[error("remote store returned HTTP {status} for {resource}")]
    Api { resource: String, status: u16 },

    /// Network-level failure (connect, timeout, DNS) or undecodable body
    #[error("transport error talking to the remote store: {0}")]
    Transport(String),
}
