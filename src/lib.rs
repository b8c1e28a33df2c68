// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # GitHub Service
//!
//! Base layer for GitHub REST API services. Resource services (issues,
//! repositories, users, ...) build on [`GitHubService`] for request
//! construction, paginated collection, existence checks, and argument
//! validation.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use github_service::{GitHubClient, GitHubService, Result};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let service = GitHubService::new(Arc::new(GitHubClient::new()?));
//!
//!     // Does the file exist?
//!     let found = service.check("/repos/rust-lang/rust/contents/README.md").await?;
//!
//!     // Every open issue, across all pages
//!     let request = service
//!         .create_paged_request()
//!         .with_uri("/repos/rust-lang/rust/issues")
//!         .with_param("state", "open");
//!     let issues: Vec<serde_json::Value> = service.get_all(request).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        GitHubService                         │
//! │  create_request / create_paged_request / create_page_iterator│
//! │  get_all   check   require_repository_id / owner_and_name    │
//! └──────────────────────────────────────────────────────────────┘
//!                │                               │
//! ┌──────────────┴──────────┐     ┌──────────────┴──────────────┐
//! │      PageIterator       │     │      Transport (trait)      │
//! │  has_next / next        │────▶│  GitHubClient (reqwest)     │
//! │  Link: rel="next"       │     │  Accept, auth, rate limit   │
//! └─────────────────────────┘     └─────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Media types, paging constants and type aliases
pub mod types;

/// Credentials
pub mod auth;

/// Request descriptors
pub mod request;

/// HTTP transport
pub mod http;

/// Page iteration
pub mod pagination;

/// Repository identifiers
pub mod repository;

/// Base service
pub mod service;

/// Settings loading
pub mod config;

/// Command-line interface
pub mod cli;

#[cfg(test)]
pub(crate) mod test_support;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use http::{GitHubClient, Transport};
pub use pagination::PageIterator;
pub use repository::{RepositoryId, RepositoryIdProvider};
pub use request::{PagedRequest, Request};
pub use service::{GitHubService, RequestDefaults};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
