//! Upstash Redis REST client implementing the rate limiter port

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::domain::ports::{RateLimitDecision, RateLimiter};
use crate::error::RateLimitError;

/// Sliding window over a sorted set scored by request time in ms.
///
/// KEYS[1] = window key, ARGV = now, window, limit, member.
/// Returns {allowed, remaining, reset_ms}.
const SLIDING_WINDOW_SCRIPT: &str = r#"
local key = KEYS[1]
local now = tonumber(ARGV[1])
local window = tonumber(ARGV[2])
local limit = tonumber(ARGV[3])
redis.call('ZREMRANGEBYSCORE', key, 0, now - window)
local count = redis.call('ZCARD', key)
local allowed = 0
if count < limit then
  redis.call('ZADD', key, now, ARGV[4])
  redis.call('PEXPIRE', key, window)
  allowed = 1
  count = count + 1
end
local reset = now + window
local oldest = redis.call('ZRANGE', key, 0, 0, 'WITHSCORES')
if oldest[2] then
  reset = tonumber(oldest[2]) + window
end
local remaining = limit - count
if remaining < 0 then
  remaining = 0
end
return {allowed, remaining, reset}
"#;

/// Rate limiter backed by Upstash Redis
pub struct UpstashRateLimiter {
    http: Client,
    base_url: String,
    token: String,
    prefix: String,
    limit: u32,
    window: Duration,
}

/// Upstash REST envelope: either `result` or `error`
#[derive(Deserialize)]
struct UpstashResponse {
    result: Option<Value>,
    error: Option<String>,
}

impl UpstashRateLimiter {
    pub fn new(
        base_url: String,
        token: String,
        prefix: String,
        limit: u32,
        window: Duration,
    ) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            prefix,
            limit,
            window,
        }
    }

    fn key(&self, identifier: &str) -> String {
        format!("{}:{}", self.prefix, identifier)
    }

    fn eval_command(&self, identifier: &str, now: DateTime<Utc>) -> Value {
        json!([
            "EVAL",
            SLIDING_WINDOW_SCRIPT,
            "1",
            self.key(identifier),
            now.timestamp_millis().to_string(),
            self.window.num_milliseconds().to_string(),
            self.limit.to_string(),
            format!("{}-{}", now.timestamp_millis(), Uuid::new_v4()),
        ])
    }

    fn decode(&self, result: Value) -> Result<RateLimitDecision, RateLimitError> {
        let values = result
            .as_array()
            .filter(|v| v.len() == 3)
            .ok_or_else(|| {
                RateLimitError::Deserialization(format!("unexpected script result: {}", result))
            })?;

        let int = |v: &Value| {
            v.as_i64().ok_or_else(|| {
                RateLimitError::Deserialization(format!("expected integer, got {}", v))
            })
        };

        let allowed = int(&values[0])? == 1;
        let remaining = u32::try_from(int(&values[1])?.max(0)).unwrap_or(0);
        let reset = DateTime::from_timestamp_millis(int(&values[2])?).ok_or_else(|| {
            RateLimitError::Deserialization("reset timestamp out of range".to_string())
        })?;

        Ok(RateLimitDecision {
            success: allowed,
            limit: self.limit,
            remaining,
            reset,
        })
    }
}

#[async_trait]
impl RateLimiter for UpstashRateLimiter {
    async fn limit(&self, identifier: &str) -> Result<RateLimitDecision, RateLimitError> {
        let response = self
            .http
            .post(&self.base_url)
            .bearer_auth(&self.token)
            .json(&self.eval_command(identifier, Utc::now()))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RateLimitError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: UpstashResponse = response
            .json()
            .await
            .map_err(|e| RateLimitError::Deserialization(e.to_string()))?;

        match (body.result, body.error) {
            (_, Some(error)) => Err(RateLimitError::Backend(error)),
            (Some(result), None) => self.decode(result),
            (None, None) => Err(RateLimitError::Deserialization(
                "empty Upstash response".to_string(),
            )),
        }
    }
}
