//! Repository identifiers
//!
//! Services address repositories by an `owner/name` id. Anything that can
//! produce one implements [`RepositoryIdProvider`].

mod id;

pub use id::{RepositoryId, RepositoryIdProvider};
