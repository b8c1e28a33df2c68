//! Transport abstraction used by services and page iterators

use super::response::GitHubResponse;
use crate::error::Result;
use crate::request::Request;
use async_trait::async_trait;

/// Sends requests to the API and returns decoded responses.
///
/// Implementations must map error statuses to
/// [`Error::HttpStatus`](crate::error::Error::HttpStatus) so that callers
/// can tell a missing resource from other failures.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a GET request
    async fn get(&self, request: &Request) -> Result<GitHubResponse>;
}
