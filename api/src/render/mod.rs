//! Renderers
//!
//! Turn content and contact messages into HTML/text.

pub mod email;
pub mod markdown;

pub use email::render_contact_email;
pub use markdown::render_markdown;
