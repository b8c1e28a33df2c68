//! Common types used throughout the service layer
//!
//! Media type constants for GitHub's content negotiation, paging
//! defaults.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Media Types
// ============================================================================

/// Accept header for raw response (only body)
pub const ACCEPT_RAW: &str = "application/vnd.github.v3.raw+json";

/// Accept header for HTML response (only body_html)
pub const ACCEPT_HTML: &str = "application/vnd.github.v3.html+json";

/// Accept header for text response (only body_text)
pub const ACCEPT_TEXT: &str = "application/vnd.github.v3.text+json";

/// Accept header for full response (body, body_text and body_html)
pub const ACCEPT_FULL: &str = "application/vnd.github.v3.full+json";

/// Accept header sent when a request does not choose a body variant
pub const ACCEPT_JSON: &str = "application/vnd.github.v3+json";

/// Body variant selected through the Accept header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcceptMediaType {
    /// Markdown source only
    Raw,
    /// Rendered HTML only
    Html,
    /// Plain text only
    Text,
    /// Source, text and HTML together
    Full,
}

impl AcceptMediaType {
    /// Header value for this variant
    pub fn header_value(self) -> &'static str {
        match self {
            Self::Raw => ACCEPT_RAW,
            Self::Html => ACCEPT_HTML,
            Self::Text => ACCEPT_TEXT,
            Self::Full => ACCEPT_FULL,
        }
    }
}

impl fmt::Display for AcceptMediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Raw => "raw",
            Self::Html => "html",
            Self::Text => "text",
            Self::Full => "full",
        };
        f.write_str(name)
    }
}

impl FromStr for AcceptMediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "raw" => Ok(Self::Raw),
            "html" => Ok(Self::Html),
            "text" => Ok(Self::Text),
            "full" => Ok(Self::Full),
            other => Err(Error::config(format!(
                "Unknown media type '{other}', expected raw, html, text or full"
            ))),
        }
    }
}

// ============================================================================
// Paging
// ============================================================================

/// First page number
pub const PAGE_FIRST: u32 = 1;

/// Default number of elements requested per page
pub const PAGE_SIZE: u32 = 100;

/// Query parameter carrying the page number
pub const PARAM_PAGE: &str = "page";

/// Query parameter carrying the page size
pub const PARAM_PER_PAGE: &str = "per_page";

// ============================================================================
// Endpoints
// ============================================================================

/// Public GitHub REST endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";
