//! Keyed per-user request limiter.

use crate::{RateLimitError, RateLimitErrorKind, RateLimitSection};
use governor::clock::DefaultClock;
use governor::state::keyed::DefaultKeyedStateStore;
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::time::Duration;
use tracing::debug;

/// Per-user generation quota over a sliding window.
///
/// Backed by a keyed GCRA limiter: a burst of `max_requests` is available
/// immediately, then capacity refills at `window / max_requests`, which
/// approximates an N-per-window sliding quota without storing timestamps.
///
/// # Examples
///
/// ```
/// use prompteur_rate_limit::{RateLimitSection, UserRateLimiter};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let limiter = UserRateLimiter::new(&RateLimitSection::default())?;
/// assert!(limiter.try_consume("user-1"));
/// # Ok(())
/// # }
/// ```
pub struct UserRateLimiter {
    limiter: RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>,
    max_requests: u32,
    window: Duration,
}

impl std::fmt::Debug for UserRateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRateLimiter")
            .field("max_requests", &self.max_requests)
            .field("window", &self.window)
            .finish_non_exhaustive()
    }
}

impl UserRateLimiter {
    /// Create a limiter from quota settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the quota is zero requests or a zero-length
    /// window.
    pub fn new(config: &RateLimitSection) -> Result<Self, RateLimitError> {
        let max_requests = NonZeroU32::new(config.max_requests).ok_or_else(|| {
            RateLimitError::new(RateLimitErrorKind::InvalidQuota(
                "max_requests must be at least 1".to_string(),
            ))
        })?;

        let window = Duration::from_secs(config.window_secs);
        let period = window / max_requests.get();
        let quota = Quota::with_period(period)
            .ok_or_else(|| {
                RateLimitError::new(RateLimitErrorKind::InvalidQuota(
                    "window_secs must be at least 1".to_string(),
                ))
            })?
            .allow_burst(max_requests);

        Ok(Self {
            limiter: RateLimiter::keyed(quota),
            max_requests: max_requests.get(),
            window,
        })
    }

    /// Consume one request from a user's quota.
    ///
    /// Returns `true` when the request is within quota. Consulted once at
    /// the start of a generation run, never per slide.
    pub fn try_consume(&self, user_id: &str) -> bool {
        let allowed = self.limiter.check_key(&user_id.to_string()).is_ok();
        if !allowed {
            debug!(user = %user_id, "Request rejected by quota");
        }
        allowed
    }

    /// The configured number of requests per window.
    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    /// The configured window length.
    pub fn window(&self) -> Duration {
        self.window
    }
}
