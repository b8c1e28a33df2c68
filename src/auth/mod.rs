//! Authentication module
//!
//! Supports: anonymous access, HTTP Basic, and personal access tokens.

mod types;

pub use types::Credentials;
