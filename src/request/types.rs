//! Request and paged request types

use crate::error::{Error, Result};
use crate::types::{PAGE_FIRST, PAGE_SIZE, PARAM_PAGE, PARAM_PER_PAGE};
use serde_json::Value;
use std::collections::BTreeMap;

/// Descriptor of a single API call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    /// Target path (relative to the API root) or absolute URL
    pub uri: Option<String>,
    /// Query parameters, rendered in key order
    pub params: BTreeMap<String, String>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
    /// Accept header override selecting a body variant
    pub accept: Option<String>,
    /// JSON body
    pub body: Option<Value>,
}

impl Request {
    /// Create an empty request with no target set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target URI
    #[must_use]
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Add a query parameter
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Add a header
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the Accept header value
    #[must_use]
    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Render the target URI with its query string
    pub fn generate_uri(&self) -> Result<String> {
        let uri = self
            .uri
            .as_deref()
            .ok_or_else(|| Error::invalid_argument("Request URI cannot be missing"))?;
        Ok(append_query(uri, &self.params))
    }
}

/// Request for one page of a paginated collection
#[derive(Debug, Clone, PartialEq)]
pub struct PagedRequest {
    /// Underlying request (target, headers, extra params)
    pub request: Request,
    /// Page to fetch, starting at [`PAGE_FIRST`]
    pub page: u32,
    /// Number of elements per page
    pub page_size: u32,
    /// Body field holding the elements when the page is not a bare array
    pub list_key: Option<String>,
}

impl PagedRequest {
    /// Create a paged request starting at `page` with `page_size` elements per page.
    ///
    /// Values are taken as given; GitHub rejects or clamps bad ones.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            request: Request::new(),
            page,
            page_size,
            list_key: None,
        }
    }

    /// Replace the underlying request
    #[must_use]
    pub fn with_request(mut self, request: Request) -> Self {
        self.request = request;
        self
    }

    /// Set the target URI
    #[must_use]
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.request.uri = Some(uri.into());
        self
    }

    /// Add a query parameter
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.params.insert(key.into(), value.into());
        self
    }

    /// Read elements from this body field instead of a top-level array
    #[must_use]
    pub fn with_list_key(mut self, key: impl Into<String>) -> Self {
        self.list_key = Some(key.into());
        self
    }

    /// Move to another page
    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    /// Query parameters including `page` and `per_page`
    pub fn params(&self) -> BTreeMap<String, String> {
        let mut params = self.request.params.clone();
        params.insert(PARAM_PAGE.to_string(), self.page.to_string());
        params.insert(PARAM_PER_PAGE.to_string(), self.page_size.to_string());
        params
    }

    /// Single request for the current page
    pub fn to_request(&self) -> Request {
        Request {
            params: self.params(),
            ..self.request.clone()
        }
    }

    /// Render the target URI for the current page
    pub fn generate_uri(&self) -> Result<String> {
        self.to_request().generate_uri()
    }
}

impl Default for PagedRequest {
    fn default() -> Self {
        Self::new(PAGE_FIRST, PAGE_SIZE)
    }
}

fn append_query(uri: &str, params: &BTreeMap<String, String>) -> String {
    if params.is_empty() {
        return uri.to_string();
    }

    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish();
    let separator = if uri.contains('?') { '&' } else { '?' };
    format!("{uri}{separator}{query}")
}
