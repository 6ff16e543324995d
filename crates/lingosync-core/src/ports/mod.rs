//! Port definitions (trait interfaces for adapters)
//!
//! - [`remote_store`] - the remote translation store (HTTP adapter in
//!   `lingosync-remote`)
//! - [`prompter`] - interactive conflict prompting (terminal adapter in
//!   `lingosync-cli`, scripted fakes in tests)

pub mod prompter;
pub mod remote_store;

pub use prompter::{ConflictChoice, IConflictPrompter};
pub use remote_store::{IRemoteStore, RemoteSnapshot};
