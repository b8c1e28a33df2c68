//! Request descriptors
//!
//! A [`Request`] describes a single call against the GitHub API; a
//! [`PagedRequest`] adds a starting page and page size. Both are plain data:
//! the transport decides how they go over the wire.

mod types;

pub use types::{PagedRequest, Request};
