//! Error types for the GitHub service layer
//!
//! Every public API returns `Result<T, Error>` where Error is defined here.
//! Page fetch failures are wrapped in [`Error::NoSuchPage`] by the page
//! iterator; collectors unwrap them again with [`Error::into_cause`].

use thiserror::Error;

/// Status code GitHub uses for missing resources
pub const HTTP_NOT_FOUND: u16 = 404;

/// The main error type for the GitHub service layer
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Argument Errors
    // ============================================================================
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Failed to fetch page: {source}")]
    NoSuchPage { source: Box<Error> },

    #[error("No more pages available")]
    PagesExhausted,
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            message: message.into(),
        }
    }

    /// Wrap a failure raised while fetching a page
    pub fn no_such_page(source: Error) -> Self {
        Self::NoSuchPage {
            source: Box::new(source),
        }
    }

    /// HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the server reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(HTTP_NOT_FOUND)
    }

    /// Unwrap a page fetch failure into the error that caused it.
    ///
    /// Only one level is removed; any other error is returned unchanged.
    pub fn into_cause(self) -> Self {
        match self {
            Error::NoSuchPage { source } => *source,
            other => other,
        }
    }
}

/// Result type alias for the GitHub service layer
pub type Result<T> = std::result::Result<T, Error>;
