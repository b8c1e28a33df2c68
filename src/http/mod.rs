//! HTTP transport module
//!
//! The [`Transport`] trait is the only thing the service layer knows about
//! HTTP. [`GitHubClient`] is the reqwest-backed implementation.
//!
//! # Features
//!
//! - **Content Negotiation**: Accept header per request, GitHub v3 JSON otherwise
//! - **Link Headers**: `first`/`prev`/`next`/`last` page links parsed per response
//! - **Rate Limiting**: Optional client-side token bucket using governor
//! - **Quota Tracking**: Last seen `X-RateLimit-*` values

mod client;
mod rate_limit;
mod response;
mod transport;

pub use client::{ClientConfig, ClientConfigBuilder, GitHubClient};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use response::{GitHubResponse, PageLinks, RateLimitInfo};
pub use transport::Transport;
