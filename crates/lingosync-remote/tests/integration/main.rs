//! Integration tests for the remote store adapter
//!
//! Each module exercises the HTTP client against a wiremock server.

mod common;
mod test_fetch;
mod test_upload;
