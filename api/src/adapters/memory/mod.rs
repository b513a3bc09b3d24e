//! In-memory adapters
//!
//! Process-local implementations used when no hosted backend is configured.

pub mod admin_repo;
pub mod rate_limiter;

pub use admin_repo::InMemoryAdminPostRepository;
pub use rate_limiter::InMemoryRateLimiter;
