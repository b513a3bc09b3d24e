//! Adapters layer
//!
//! Implementations of port traits for the filesystem, hosted services and memory.

pub mod fs;
pub mod memory;
pub mod resend;
pub mod upstash;

pub use fs::{FsPostRepository, FsProjectRepository};
pub use memory::{InMemoryAdminPostRepository, InMemoryRateLimiter};
pub use resend::{LogEmailSender, ResendEmailSender};
pub use upstash::UpstashRateLimiter;
