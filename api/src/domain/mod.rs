//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Posts, projects, contact messages and admin rows
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
