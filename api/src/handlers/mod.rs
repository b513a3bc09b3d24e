//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod admin;
pub mod contact;
pub mod posts;
pub mod projects;

pub use admin::{
    bulk_delete_admin_posts, delete_admin_post, export_admin_posts, list_admin_posts,
};
pub use contact::submit_contact;
pub use posts::{get_post, list_posts, list_tags};
pub use projects::{get_project, list_projects};
