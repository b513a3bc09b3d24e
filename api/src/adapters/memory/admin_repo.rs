//! In-memory adapter for AdminPostRepository

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{AdminPost, AdminPostId, Post};
use crate::domain::ports::AdminPostRepository;
use crate::error::DomainError;

/// Admin post rows held in process memory
#[derive(Default)]
pub struct InMemoryAdminPostRepository {
    posts: RwLock<HashMap<AdminPostId, AdminPost>>,
}

impl InMemoryAdminPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with rows
    pub fn with_posts(self, posts: impl IntoIterator<Item = AdminPost>) -> Self {
        if let Ok(mut map) = self.posts.write() {
            map.extend(posts.into_iter().map(|p| (p.id, p)));
        }
        self
    }

    /// Seed one row per blog post. Undated posts take `now` as creation time.
    pub fn from_posts(posts: &[Post], now: DateTime<Utc>) -> Self {
        Self::new().with_posts(posts.iter().map(|post| AdminPost {
            id: AdminPostId::new(),
            title: post.title.clone(),
            slug: post.slug.clone(),
            published: post.published,
            created_at: post
                .date
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map_or(now, |dt| dt.and_utc()),
        }))
    }
}

fn poisoned() -> DomainError {
    DomainError::Internal("admin post store lock poisoned".to_string())
}

#[async_trait]
impl AdminPostRepository for InMemoryAdminPostRepository {
    async fn list(&self) -> Result<Vec<AdminPost>, DomainError> {
        let posts = self.posts.read().map_err(|_| poisoned())?;
        Ok(posts.values().cloned().collect())
    }

    async fn delete(&self, id: &AdminPostId) -> Result<bool, DomainError> {
        let mut posts = self.posts.write().map_err(|_| poisoned())?;
        Ok(posts.remove(id).is_some())
    }

    async fn delete_many(&self, ids: &[AdminPostId]) -> Result<usize, DomainError> {
        let mut posts = self.posts.write().map_err(|_| poisoned())?;
        Ok(ids.iter().filter(|id| posts.remove(*id).is_some()).count())
    }
}
