//! Pagination module
//!
//! [`PageIterator`] walks a paginated GitHub collection one page at a time,
//! following the `next` relation of each response's `Link` header.
//!
//! # Overview
//!
//! The iterator is forward-only and cannot be restarted. Every failure
//! raised while fetching or decoding a page is wrapped in
//! [`Error::NoSuchPage`](crate::error::Error::NoSuchPage) so that callers
//! can tell pagination failures apart; collectors unwrap it again.

mod iterator;

pub use iterator::PageIterator;
