//! Upstash adapter
//!
//! Hosted sliding-window rate limiting over the Upstash Redis REST API.

pub mod client;

pub use client::UpstashRateLimiter;
