//! Filesystem adapter for ProjectRepository

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::entities::Project;
use crate::domain::ports::ProjectRepository;
use crate::error::DomainError;

use super::front_matter::{self, ProjectFrontMatter};
use super::{content_files, find_content_file, read_file};

/// Reads projects from `{content_dir}/projects`
pub struct FsProjectRepository {
    dir: PathBuf,
}

impl FsProjectRepository {
    pub fn new(content_dir: impl AsRef<Path>) -> Self {
        Self {
            dir: content_dir.as_ref().join("projects"),
        }
    }

    async fn load(&self, slug: &str, path: &Path) -> Result<Project, DomainError> {
        let source = read_file(path).await?;
        parse_project(slug, &source)
    }
}

/// Build a project from a file's source
pub fn parse_project(slug: &str, source: &str) -> Result<Project, DomainError> {
    let (meta, body): (ProjectFrontMatter, _) = front_matter::parse(source)?;
    let body = body.trim();

    Ok(Project {
        id: meta.id.unwrap_or_else(|| slug.to_string()),
        title: meta.title.unwrap_or_else(|| slug.to_string()),
        slug: slug.to_string(),
        description: meta.description,
        cover_image: meta.cover_image,
        images: meta.images,
        tags: meta.tags,
        demo_url: meta.demo_url,
        github_url: meta.github_url,
        featured: meta.featured,
        date: meta.date.as_deref().and_then(front_matter::parse_date),
        content: (!body.is_empty()).then(|| body.to_string()),
    })
}

#[async_trait]
impl ProjectRepository for FsProjectRepository {
    async fn list(&self) -> Result<Vec<Project>, DomainError> {
        let mut projects = Vec::new();
        for (slug, path) in content_files(&self.dir).await? {
            match self.load(&slug, &path).await {
                Ok(project) => projects.push(project),
                Err(e) => {
                    tracing::warn!(error = %e, path = %path.display(), "Skipping unreadable project");
                }
            }
        }
        Ok(projects)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Project>, DomainError> {
        match find_content_file(&self.dir, slug).await {
            Some(path) => self.load(slug, &path).await.map(Some),
            None => Ok(None),
        }
    }
}
