//! Rate limiter port trait
//!
//! A sliding-window limiter keyed by client identity.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::RateLimitError;

/// Outcome of a single rate-limit check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateLimitDecision {
    /// Whether the request is allowed
    pub success: bool,
    /// Maximum requests per window
    pub limit: u32,
    /// Requests left in the window after this one
    pub remaining: u32,
    /// When the oldest request in the window expires
    pub reset: DateTime<Utc>,
}

#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Record a request for `identifier` and report whether it is within the limit
    async fn limit(&self, identifier: &str) -> Result<RateLimitDecision, RateLimitError>;
}
