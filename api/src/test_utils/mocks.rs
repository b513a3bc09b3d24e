//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use crate::domain::entities::{Post, Project};
use crate::domain::ports::{
    EmailSender, OutboundEmail, PostRepository, ProjectRepository, RateLimitDecision, RateLimiter,
    SentEmail,
};
use crate::error::{DomainError, EmailError, RateLimitError};

// ============================================================================
// In-Memory Post Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: Arc<RwLock<HashMap<String, Post>>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a post for testing
    pub fn with_post(self, post: Post) -> Self {
        self.posts.write().unwrap().insert(post.slug.clone(), post);
        self
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.read().unwrap().values().cloned().collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, DomainError> {
        Ok(self.posts.read().unwrap().get(slug).cloned())
    }
}

// ============================================================================
// In-Memory Project Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<HashMap<String, Project>>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a project for testing
    pub fn with_project(self, project: Project) -> Self {
        self.projects
            .write()
            .unwrap()
            .insert(project.slug.clone(), project);
        self
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn list(&self) -> Result<Vec<Project>, DomainError> {
        Ok(self.projects.read().unwrap().values().cloned().collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Project>, DomainError> {
        Ok(self.projects.read().unwrap().get(slug).cloned())
    }
}

// ============================================================================
// Mock Email Sender
// ============================================================================

/// Records every email; optionally fails every send
#[derive(Default)]
pub struct MockEmailSender {
    sent: Mutex<Vec<OutboundEmail>>,
    failure: Option<fn() -> EmailError>,
    next_id: Mutex<u32>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sender whose every call fails with (a fresh copy of) `error`
    pub fn failing(error: EmailError) -> Self {
        let failure: fn() -> EmailError = match error {
            EmailError::Unauthorized => || EmailError::Unauthorized,
            EmailError::RateLimited => || EmailError::RateLimited,
            _ => || EmailError::Api {
                status: 500,
                message: "mock failure".to_string(),
            },
        };
        Self {
            failure: Some(failure),
            ..Self::default()
        }
    }

    /// Emails sent so far
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send(&self, email: &OutboundEmail) -> Result<SentEmail, EmailError> {
        if let Some(failure) = self.failure {
            return Err(failure());
        }
        self.sent.lock().unwrap().push(email.clone());
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        Ok(SentEmail {
            id: format!("mock-email-{}", *next_id),
        })
    }
}

// ============================================================================
// Failing Rate Limiter
// ============================================================================

/// Limiter whose backend is always down
pub struct FailingRateLimiter;

#[async_trait]
impl RateLimiter for FailingRateLimiter {
    async fn limit(&self, _identifier: &str) -> Result<RateLimitDecision, RateLimitError> {
        Err(RateLimitError::Backend("limiter unavailable".to_string()))
    }
}
