//! Lingosync Remote - HTTP adapter for the remote translation store
//!
//! Provides:
//! - [`StoreClient`] - typed HTTP client for the store's REST API
//! - [`HttpRemoteStore`] - the [`IRemoteStore`] port implementation
//! - [`RemoteError`] - the error taxonomy for store interactions
//!
//! [`IRemoteStore`]: lingosync_core::ports::IRemoteStore

pub mod client;
pub mod error;
pub mod store;

pub use client::StoreClient;
pub use error::RemoteError;
pub use store::HttpRemoteStore;
