//! Defaults applied by the request factories

use crate::error::{Error, Result};
use crate::types::{AcceptMediaType, PAGE_FIRST, PAGE_SIZE};
use serde::{Deserialize, Serialize};

/// Values every request created by a service starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestDefaults {
    /// Body variant requested through the Accept header
    pub accept: Option<AcceptMediaType>,
    /// First page requested by paged requests
    pub start_page: u32,
    /// Elements per page
    pub page_size: u32,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            accept: None,
            start_page: PAGE_FIRST,
            page_size: PAGE_SIZE,
        }
    }
}

impl RequestDefaults {
    /// Request a specific body variant
    #[must_use]
    pub fn with_accept(mut self, accept: AcceptMediaType) -> Self {
        self.accept = Some(accept);
        self
    }

    /// Start paged requests at another page (at least [`PAGE_FIRST`])
    #[must_use]
    pub fn with_start_page(mut self, start_page: u32) -> Self {
        self.start_page = start_page.max(PAGE_FIRST);
        self
    }

    /// Use another page size (at least one)
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Check that paged requests built from these defaults are valid
    pub fn validate(&self) -> Result<()> {
        if self.start_page < PAGE_FIRST {
            return Err(Error::config(format!(
                "start_page must be at least {PAGE_FIRST}"
            )));
        }
        if self.page_size == 0 {
            return Err(Error::config("page_size must be greater than zero"));
        }
        Ok(())
    }
}
