//! Domain entities
//!
//! Pure domain models representing the site's content and messages.

pub mod admin_post;
pub mod contact;
pub mod post;
pub mod project;

pub use admin_post::{
    AdminPost, AdminPostId, PostPage, PostQuery, SortColumn, SortDirection, StatusFilter,
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use contact::{ContactMessage, ContactReceipt};
pub use post::{reading_time, Post, PostSummary};
pub use project::Project;
