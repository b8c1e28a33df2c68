//! Base GitHub service

use super::defaults::RequestDefaults;
use crate::error::{Error, Result};
use crate::http::{GitHubClient, Transport};
use crate::pagination::PageIterator;
use crate::repository::RepositoryIdProvider;
use crate::request::{PagedRequest, Request};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// Base service holding the transport handle.
///
/// Resource services wrap one of these and build their calls through the
/// factory methods, so that [`RequestDefaults`] apply everywhere.
pub struct GitHubService<T: Transport + ?Sized = GitHubClient> {
    client: Arc<T>,
    defaults: RequestDefaults,
}

impl GitHubService<GitHubClient> {
    /// Create a service backed by a default [`GitHubClient`]
    pub fn with_default_client() -> Result<Self> {
        Ok(Self::new(Arc::new(GitHubClient::new()?)))
    }
}

impl<T: Transport + ?Sized> GitHubService<T> {
    /// Create a service for a client
    pub fn new(client: Arc<T>) -> Self {
        Self {
            client,
            defaults: RequestDefaults::default(),
        }
    }

    /// Create a service for a client that may be absent
    pub fn try_new(client: Option<Arc<T>>) -> Result<Self> {
        client
            .map(Self::new)
            .ok_or_else(|| Error::invalid_argument("Client cannot be missing"))
    }

    /// Replace the request defaults
    #[must_use]
    pub fn with_defaults(mut self, defaults: RequestDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Configured client
    pub fn client(&self) -> &Arc<T> {
        &self.client
    }

    /// Defaults applied by the request factories
    pub fn defaults(&self) -> &RequestDefaults {
        &self.defaults
    }

    // ============================================================================
    // Request Factories
    // ============================================================================

    /// Create a request with no target set; callers must set the URI
    pub fn create_request(&self) -> Request {
        let request = Request::new();
        match self.defaults.accept {
            Some(accept) => request.with_accept(accept.header_value()),
            None => request,
        }
    }

    /// Create a paged request starting at the default page with the default size
    pub fn create_paged_request(&self) -> PagedRequest {
        self.create_paged_request_with(self.defaults.start_page, self.defaults.page_size)
    }

    /// Create a paged request with explicit paging.
    ///
    /// `start` and `size` are not validated here.
    pub fn create_paged_request_with(&self, start: u32, size: u32) -> PagedRequest {
        PagedRequest::new(start, size).with_request(self.create_request())
    }

    /// Bind a paged request to this service's client
    pub fn create_page_iterator<V>(&self, request: PagedRequest) -> PageIterator<V, T> {
        PageIterator::new(request, Arc::clone(&self.client))
    }

    // ============================================================================
    // Collection
    // ============================================================================

    /// Fetch every page of a paged request
    pub async fn get_all<V: DeserializeOwned>(&self, request: PagedRequest) -> Result<Vec<V>> {
        self.get_all_from(self.create_page_iterator(request)).await
    }

    /// Drain an iterator, concatenating its pages in fetch order.
    ///
    /// A page failure is reported as its underlying cause rather than as
    /// [`Error::NoSuchPage`]; pages collected before the failure are dropped.
    pub async fn get_all_from<V, U>(&self, mut iterator: PageIterator<V, U>) -> Result<Vec<V>>
    where
        V: DeserializeOwned,
        U: Transport + ?Sized,
    {
        let mut elements = Vec::new();
        while iterator.has_next() {
            let page = iterator.next().await.map_err(Error::into_cause)?;
            elements.extend(page);
        }
        debug!("Collected {} elements", elements.len());
        Ok(elements)
    }

    // ============================================================================
    // Existence
    // ============================================================================

    /// Check whether `uri` exists.
    ///
    /// Returns `false` on a 404; any other failure is returned unchanged.
    pub async fn check(&self, uri: &str) -> Result<bool> {
        let request = self.create_request().with_uri(uri);
        match self.client.get(&request).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => {
                debug!("{} not found", uri);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    // ============================================================================
    // Argument Guards
    // ============================================================================

    /// Get the id of a repository, which must be present and non-empty
    pub fn require_repository_id(
        &self,
        provider: Option<&dyn RepositoryIdProvider>,
    ) -> Result<String> {
        let provider =
            provider.ok_or_else(|| Error::invalid_argument("Repository provider cannot be missing"))?;
        let id = provider
            .generate_id()
            .ok_or_else(|| Error::invalid_argument("Repository id cannot be missing"))?;
        if id.is_empty() {
            return Err(Error::invalid_argument("Repository id cannot be empty"));
        }
        Ok(id)
    }

    /// Verify that an owner and repository name are present and non-empty
    pub fn require_owner_and_name(&self, owner: Option<&str>, name: Option<&str>) -> Result<&Self> {
        match owner {
            None => return Err(Error::invalid_argument("Owner cannot be missing")),
            Some("") => return Err(Error::invalid_argument("Owner cannot be empty")),
            Some(_) => {}
        }
        match name {
            None => Err(Error::invalid_argument("Repository name cannot be missing")),
            Some("") => Err(Error::invalid_argument("Repository name cannot be empty")),
            Some(_) => Ok(self),
        }
    }
}

impl<T: Transport + ?Sized> Clone for GitHubService<T> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            defaults: self.defaults,
        }
    }
}

impl<T: Transport + ?Sized> std::fmt::Debug for GitHubService<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubService")
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}
