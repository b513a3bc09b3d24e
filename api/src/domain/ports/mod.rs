//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod email;
pub mod rate_limit;
pub mod repositories;

pub use email::{EmailSender, OutboundEmail, SentEmail};
pub use rate_limit::{RateLimitDecision, RateLimiter};
pub use repositories::{AdminPostRepository, PostRepository, ProjectRepository};
