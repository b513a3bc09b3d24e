//! Content service
//!
//! Serves blog posts and projects: ordering, tag lookups and rendered detail views.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::{Post, PostSummary, Project};
use crate::domain::ports::{PostRepository, ProjectRepository};
use crate::error::AppError;
use crate::render::render_markdown;

/// A post with its body rendered to HTML
#[derive(Debug, Clone, Serialize)]
pub struct RenderedPost {
    #[serde(flatten)]
    pub post: Post,
    pub html: String,
}

/// A project with its long-form content rendered to HTML
#[derive(Debug, Clone, Serialize)]
pub struct RenderedProject {
    #[serde(flatten)]
    pub project: Project,
    pub html: Option<String>,
}

/// Newest first, undated last
fn by_date_desc(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Service for reading site content
pub struct ContentService {
    posts: Arc<dyn PostRepository>,
    projects: Arc<dyn ProjectRepository>,
}

impl ContentService {
    pub fn new(posts: Arc<dyn PostRepository>, projects: Arc<dyn ProjectRepository>) -> Self {
        Self { posts, projects }
    }

    async fn published_posts(&self) -> Result<Vec<Post>, AppError> {
        let mut posts: Vec<Post> = self
            .posts
            .list()
            .await?
            .into_iter()
            .filter(|p| p.published)
            .collect();
        posts.sort_by(|a, b| by_date_desc(a.date, b.date).then_with(|| a.slug.cmp(&b.slug)));
        Ok(posts)
    }

    /// Published posts, newest first
    pub async fn list_posts(&self) -> Result<Vec<PostSummary>, AppError> {
        Ok(self
            .published_posts()
            .await?
            .iter()
            .map(Post::summary)
            .collect())
    }

    /// Published posts carrying `tag`, newest first
    pub async fn posts_by_tag(&self, tag: &str) -> Result<Vec<PostSummary>, AppError> {
        Ok(self
            .published_posts()
            .await?
            .iter()
            .filter(|p| p.has_tag(tag))
            .map(Post::summary)
            .collect())
    }

    /// Unique tags across published posts, in order of first appearance
    pub async fn all_tags(&self) -> Result<Vec<String>, AppError> {
        let mut seen = HashSet::new();
        Ok(self
            .published_posts()
            .await?
            .into_iter()
            .flat_map(|p| p.tags)
            .filter(|t| seen.insert(t.clone()))
            .collect())
    }

    /// A published post with rendered HTML
    pub async fn get_post(&self, slug: &str) -> Result<RenderedPost, AppError> {
        let post = self
            .posts
            .find_by_slug(slug)
            .await?
            .filter(|p| p.published)
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", slug)))?;

        let html = render_markdown(&post.content);
        Ok(RenderedPost { post, html })
    }

    /// All projects, newest first
    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let mut projects = self.projects.list().await?;
        projects.sort_by(|a, b| by_date_desc(a.date, b.date).then_with(|| a.slug.cmp(&b.slug)));
        Ok(projects)
    }

    /// Featured projects, newest first
    pub async fn featured_projects(&self) -> Result<Vec<Project>, AppError> {
        Ok(self
            .list_projects()
            .await?
            .into_iter()
            .filter(|p| p.featured)
            .collect())
    }

    /// Projects tagged `tag` (case-insensitive), newest first
    pub async fn projects_by_tag(&self, tag: &str) -> Result<Vec<Project>, AppError> {
        Ok(self
            .list_projects()
            .await?
            .into_iter()
            .filter(|p| p.has_tag(tag))
            .collect())
    }

    /// A project with its long-form content rendered
    pub async fn get_project(&self, slug: &str) -> Result<RenderedProject, AppError> {
        let project = self
            .projects
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project {} not found", slug)))?;

        let html = project.content.as_deref().map(render_markdown);
        Ok(RenderedProject { project, html })
    }
}
