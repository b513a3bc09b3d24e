//! In-process sliding-window rate limiter

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::domain::ports::{RateLimitDecision, RateLimiter};
use crate::error::RateLimitError;

/// Identities tracked before expired windows are swept
const SWEEP_THRESHOLD: usize = 10_000;

/// Sweeps run at most once per this fraction of the window
const SWEEP_FRACTION: i32 = 10;

#[derive(Default)]
struct Hits {
    by_identity: HashMap<String, VecDeque<DateTime<Utc>>>,
    last_sweep: Option<DateTime<Utc>>,
}

impl Hits {
    /// Drop identities whose newest hit has left the window
    fn sweep(&mut self, now: DateTime<Utc>, window: Duration) {
        let cutoff = now - window;
        self.by_identity
            .retain(|_, times| times.back().is_some_and(|t| *t > cutoff));
        self.last_sweep = Some(now);
    }

    fn sweep_due(&self, now: DateTime<Utc>, window: Duration) -> bool {
        self.by_identity.len() > SWEEP_THRESHOLD
            && self
                .last_sweep
                .map_or(true, |last| now - last >= window / SWEEP_FRACTION)
    }
}

/// Sliding-window limiter keeping request timestamps per identity.
///
/// Same semantics as the hosted limiter: a request is allowed when fewer than
/// `limit` requests from the same identity fall inside the trailing window.
pub struct InMemoryRateLimiter {
    limit: u32,
    window: Duration,
    hits: Mutex<Hits>,
}

impl InMemoryRateLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            limit,
            window,
            hits: Mutex::new(Hits::default()),
        }
    }

    /// Check and record a request at an explicit instant
    pub fn check_at(
        &self,
        identifier: &str,
        now: DateTime<Utc>,
    ) -> Result<RateLimitDecision, RateLimitError> {
        let mut hits = self
            .hits
            .lock()
            .map_err(|_| RateLimitError::Backend("rate limiter lock poisoned".to_string()))?;

        if hits.sweep_due(now, self.window) {
            hits.sweep(now, self.window);
        }

        let times = hits.by_identity.entry(identifier.to_string()).or_default();
        let cutoff = now - self.window;
        while times.front().is_some_and(|t| *t <= cutoff) {
            times.pop_front();
        }

        let used = u32::try_from(times.len()).unwrap_or(u32::MAX);
        let success = used < self.limit;
        if success {
            times.push_back(now);
        }

        let remaining = if success { self.limit - used - 1 } else { 0 };
        let reset = times.front().map_or(now, |t| *t) + self.window;

        Ok(RateLimitDecision {
            success,
            limit: self.limit,
            remaining,
            reset,
        })
    }
}

#[async_trait]
impl RateLimiter for InMemoryRateLimiter {
    async fn limit(&self, identifier: &str) -> Result<RateLimitDecision, RateLimitError> {
        self.check_at(identifier, Utc::now())
    }
}
