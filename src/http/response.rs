//! Decoded API responses
//!
//! Pairs the JSON body with the page links and quota information that
//! GitHub reports in headers.

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde_json::Value;

/// Response returned by a [`Transport`](super::Transport)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GitHubResponse {
    /// Decoded body (JSON null when the body was empty)
    pub body: Value,
    /// Page navigation links
    pub links: PageLinks,
    /// Quota reported with the response
    pub rate_limit: Option<RateLimitInfo>,
}

impl GitHubResponse {
    /// Create a response with a body and no links
    pub fn new(body: Value) -> Self {
        Self {
            body,
            ..Default::default()
        }
    }

    /// Build a response from raw headers and a decoded body
    pub fn from_parts(headers: &HeaderMap, body: Value) -> Self {
        Self {
            body,
            links: PageLinks::from_headers(headers),
            rate_limit: RateLimitInfo::from_headers(headers),
        }
    }

    /// Set page links
    #[must_use]
    pub fn with_links(mut self, links: PageLinks) -> Self {
        self.links = links;
        self
    }

    /// URI of the next page, if any
    pub fn next(&self) -> Option<&str> {
        self.links.next.as_deref()
    }

    /// URI of the last page, if any
    pub fn last(&self) -> Option<&str> {
        self.links.last.as_deref()
    }
}

// ============================================================================
// Link Header
// ============================================================================

/// Page links from an RFC 5988 `Link` header
///
/// Format: `Link: <https://api.github.com/...?page=2>; rel="next", ...`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLinks {
    /// First page
    pub first: Option<String>,
    /// Previous page
    pub prev: Option<String>,
    /// Next page
    pub next: Option<String>,
    /// Last page
    pub last: Option<String>,
}

impl PageLinks {
    /// Parse a `Link` header value
    ///
    /// Entries are delimited by their `<...>` targets, so commas inside a
    /// target URL are kept.
    pub fn parse(header: &str) -> Self {
        let mut links = Self::default();
        let mut rest = header;

        while let Some(start) = rest.find('<') {
            let target = &rest[start + 1..];
            let Some(end) = target.find('>') else {
                break;
            };
            let url = &target[..end];
            let tail = &target[end + 1..];
            let params_end = tail.find('<').unwrap_or(tail.len());
            let params = &tail[..params_end];
            rest = &tail[params_end..];

            let rel = params.split(';').find_map(|segment| {
                segment
                    .trim()
                    .trim_end_matches(',')
                    .trim_end()
                    .strip_prefix("rel=")
                    .map(|rel| rel.trim_matches('"').trim_matches('\''))
            });
            let Some(rel) = rel else {
                continue;
            };
            let slot = match rel {
                "first" => &mut links.first,
                "prev" => &mut links.prev,
                "next" => &mut links.next,
                "last" => &mut links.last,
                _ => continue,
            };
            *slot = Some(url.to_string());
        }

        links
    }

    /// Read links from response headers
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(reqwest::header::LINK)
            .and_then(|v| v.to_str().ok())
            .map(Self::parse)
            .unwrap_or_default()
    }

    /// Create links with only a next page
    pub fn with_next(next: impl Into<String>) -> Self {
        Self {
            next: Some(next.into()),
            ..Default::default()
        }
    }
}

// ============================================================================
// Rate Limit
// ============================================================================

/// Quota from `X-RateLimit-*` headers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Requests allowed per window
    pub limit: u32,
    /// Requests left in the current window
    pub remaining: u32,
    /// When the window resets
    pub reset: Option<DateTime<Utc>>,
}

impl RateLimitInfo {
    /// Read quota headers; `None` unless both limit and remaining are present
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let limit: u32 = header_number(headers, "x-ratelimit-limit")?;
        let remaining: u32 = header_number(headers, "x-ratelimit-remaining")?;
        let reset = header_number::<i64>(headers, "x-ratelimit-reset")
            .and_then(|secs| DateTime::from_timestamp(secs, 0));

        Some(Self {
            limit,
            remaining,
            reset,
        })
    }

    /// Check if no requests are left in the current window
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

fn header_number<N: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<N> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
}
