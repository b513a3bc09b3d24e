//! Repository port traits
//!
//! These traits define the interface for reading site content and managing
//! admin post rows. Implementations are provided by adapters (filesystem, memory).

use async_trait::async_trait;

use crate::domain::entities::{AdminPost, AdminPostId, Post, Project};
use crate::error::DomainError;

/// Source of blog posts
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, drafts included, in no particular order
    async fn list(&self) -> Result<Vec<Post>, DomainError>;

    /// Find a post by slug
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, DomainError>;
}

/// Source of portfolio projects
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// All projects in no particular order
    async fn list(&self) -> Result<Vec<Project>, DomainError>;

    /// Find a project by slug
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Project>, DomainError>;
}

/// Store behind the admin post table
#[async_trait]
pub trait AdminPostRepository: Send + Sync {
    /// All rows in no particular order
    async fn list(&self) -> Result<Vec<AdminPost>, DomainError>;

    /// Delete a row, returning whether it existed
    async fn delete(&self, id: &AdminPostId) -> Result<bool, DomainError>;

    /// Delete several rows, returning how many existed
    async fn delete_many(&self, ids: &[AdminPostId]) -> Result<usize, DomainError>;
}
