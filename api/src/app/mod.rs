//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and renderers.

pub mod admin_service;
pub mod contact_service;
pub mod content_service;

pub use admin_service::AdminPostService;
pub use contact_service::{ContactService, ContactSettings};
pub use content_service::{ContentService, RenderedPost, RenderedProject};
