//! Page iterator over a paginated collection

use crate::error::{Error, Result};
use crate::http::{GitHubClient, GitHubResponse, Transport};
use crate::request::{PagedRequest, Request};
use crate::types::{DEFAULT_API_URL, PARAM_PAGE};
use futures::stream::{self, Stream};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Where the next fetch goes
#[derive(Debug, Clone, PartialEq, Eq)]
enum NextPage {
    /// Same request, another page number
    Page(u32),
    /// Link target without a page number (cursor-style endpoints)
    Uri(String),
}

/// Lazy, forward-only iterator over the pages of a collection.
///
/// Each call to [`next`](Self::next) performs exactly one request. Once a
/// response carries no `next` link, or a fetch fails, the iterator is
/// exhausted.
pub struct PageIterator<V, T: Transport + ?Sized = GitHubClient> {
    request: PagedRequest,
    transport: Arc<T>,
    next: Option<NextPage>,
    last_page: Option<u32>,
    _marker: PhantomData<fn() -> V>,
}

impl<V, T: Transport + ?Sized> PageIterator<V, T> {
    /// Bind a paged request to a transport
    pub fn new(request: PagedRequest, transport: Arc<T>) -> Self {
        let next = Some(NextPage::Page(request.page));
        Self {
            request,
            transport,
            next,
            last_page: None,
            _marker: PhantomData,
        }
    }

    /// Check if another page can be fetched
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Request this iterator was created from, at its current page
    pub fn request(&self) -> &PagedRequest {
        &self.request
    }

    /// Page number the next fetch will request, when known
    pub fn next_page(&self) -> Option<u32> {
        match &self.next {
            Some(NextPage::Page(page)) => Some(*page),
            Some(NextPage::Uri(uri)) => page_number(uri),
            None => None,
        }
    }

    /// Last page number announced by the server, if any
    pub fn last_page(&self) -> Option<u32> {
        self.last_page
    }
}

impl<V: DeserializeOwned, T: Transport + ?Sized> PageIterator<V, T> {
    /// Fetch the next page.
    ///
    /// Fails with [`Error::NoSuchPage`] wrapping the underlying cause, or
    /// with [`Error::PagesExhausted`] if no page is left.
    pub async fn next(&mut self) -> Result<Vec<V>> {
        let Some(next) = self.next.take() else {
            return Err(Error::PagesExhausted);
        };

        self.fetch(next).await.map_err(Error::no_such_page)
    }

    /// Turn the iterator into a stream of pages.
    ///
    /// The stream ends after the last page or after the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<Vec<V>>> {
        stream::unfold(self, |mut pages| async move {
            if !pages.has_next() {
                return None;
            }
            let page = pages.next().await;
            Some((page, pages))
        })
    }

    async fn fetch(&mut self, next: NextPage) -> Result<Vec<V>> {
        let request = match next {
            NextPage::Page(page) => {
                self.request.set_page(page);
                self.request.to_request()
            }
            // the link already carries every query parameter
            NextPage::Uri(uri) => Request {
                uri: Some(uri),
                params: BTreeMap::new(),
                ..self.request.request.clone()
            },
        };

        debug!(
            "Fetching page {} of {}",
            request.params.get(PARAM_PAGE).map_or("-", String::as_str),
            request.uri.as_deref().unwrap_or_default()
        );
        let GitHubResponse { body, links, .. } = self.transport.get(&request).await?;

        if let Some(last) = links.last.as_deref().and_then(page_number) {
            self.last_page = Some(last);
        }
        let next = links.next.map(|uri| match page_number(&uri) {
            Some(page) => NextPage::Page(page),
            None => NextPage::Uri(uri),
        });
        let elements = self.decode(body)?;

        self.next = next;
        Ok(elements)
    }

    fn decode(&self, body: Value) -> Result<Vec<V>> {
        let items = match (&self.request.list_key, body) {
            (Some(key), Value::Object(mut map)) => map.remove(key).unwrap_or(Value::Null),
            (Some(_), _) => Value::Null,
            (None, body) => body,
        };

        if items.is_null() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_value(items)?)
    }
}

impl<V, T: Transport + ?Sized> std::fmt::Debug for PageIterator<V, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageIterator")
            .field("request", &self.request)
            .field("next", &self.next)
            .field("last_page", &self.last_page)
            .finish_non_exhaustive()
    }
}

/// Extract the `page` query parameter from a link
fn page_number(uri: &str) -> Option<u32> {
    let url = Url::parse(uri)
        .or_else(|_| Url::parse(DEFAULT_API_URL).and_then(|base| base.join(uri)))
        .ok()?;
    url.query_pairs()
        .find(|(key, _)| key == PARAM_PAGE)
        .and_then(|(_, value)| value.parse().ok())
}

#[cfg(test)]
mod iterator_tests {
    use super::page_number;

    #[test]
    fn test_page_number_absolute() {
        assert_eq!(
            page_number("https://api.github.com/user/repos?page=3&per_page=100"),
            Some(3)
        );
    }

    #[test]
    fn test_page_number_relative() {
        assert_eq!(page_number("/user/repos?per_page=10&page=7"), Some(7));
    }

    #[test]
    fn test_page_number_missing() {
        assert_eq!(page_number("https://api.github.com/events?after=abc"), None);
        assert_eq!(page_number("https://api.github.com/events?page=x"), None);
    }
}
