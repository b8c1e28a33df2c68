//! Client-side rate limiting
//!
//! Two gates run before every request: a governor token bucket that spaces
//! out bursts from this process, and a quota gate that holds requests once
//! GitHub reports `X-RateLimit-Remaining: 0`, until `X-RateLimit-Reset`.

use super::response::RateLimitInfo;
use chrono::{DateTime, Utc};
use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::sync::{Arc, Mutex};
use tracing::info;

/// Rate limiting settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimiterConfig {
    /// Sustained requests per second
    pub requests_per_second: u32,
    /// Requests allowed back to back
    pub burst_size: u32,
    /// Hold requests until the quota window resets once it is used up
    #[serde(default = "default_wait_for_reset")]
    pub wait_for_reset: bool,
}

fn default_wait_for_reset() -> bool {
    true
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self::new(10, 10)
    }
}

impl RateLimiterConfig {
    /// Token bucket of `requests_per_second` refilling up to `burst_size`
    pub fn new(requests_per_second: u32, burst_size: u32) -> Self {
        Self {
            requests_per_second,
            burst_size,
            wait_for_reset: true,
        }
    }

    /// Send requests even when the server reports an exhausted quota
    #[must_use]
    pub fn ignore_quota(mut self) -> Self {
        self.wait_for_reset = false;
        self
    }
}

/// Token bucket plus GitHub quota gate
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
    blocked_until: Arc<Mutex<Option<DateTime<Utc>>>>,
    wait_for_reset: bool,
}

impl RateLimiter {
    /// Create a limiter. Zero rates and bursts are raised to one.
    pub fn new(config: &RateLimiterConfig) -> Self {
        let rate = NonZeroU32::new(config.requests_per_second).unwrap_or(NonZeroU32::MIN);
        let burst = NonZeroU32::new(config.burst_size).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::per_second(rate).allow_burst(burst);

        Self {
            limiter: Arc::new(Governor::direct(quota)),
            blocked_until: Arc::new(Mutex::new(None)),
            wait_for_reset: config.wait_for_reset,
        }
    }

    /// Record the quota reported by a response
    pub fn observe(&self, quota: &RateLimitInfo) {
        if !self.wait_for_reset {
            return;
        }
        if let Ok(mut blocked) = self.blocked_until.lock() {
            *blocked = quota.reset.filter(|_| quota.is_exhausted());
        }
    }

    /// Reset time the next request is held until, if it lies in the future
    pub fn blocked_until(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.blocked_until
            .lock()
            .ok()
            .and_then(|guard| *guard)
            .filter(|reset| *reset > now)
    }

    /// Wait until a request can be made
    pub async fn wait(&self) {
        if let Some(reset) = self.blocked_until(Utc::now()) {
            if let Ok(delay) = (reset - Utc::now()).to_std() {
                info!("GitHub quota exhausted, waiting {}s for reset", delay.as_secs());
                tokio::time::sleep(delay).await;
            }
        }
        self.limiter.until_ready().await;
    }

    /// Try to acquire a permit, returning immediately
    pub fn try_acquire(&self) -> bool {
        self.blocked_until(Utc::now()).is_none() && self.limiter.check().is_ok()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(&RateLimiterConfig::default())
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("wait_for_reset", &self.wait_for_reset)
            .finish_non_exhaustive()
    }
}
