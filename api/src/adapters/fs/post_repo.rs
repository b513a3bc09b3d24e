//! Filesystem adapter for PostRepository

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::entities::{reading_time, Post};
use crate::domain::ports::PostRepository;
use crate::error::DomainError;

use super::front_matter::{self, PostFrontMatter};
use super::{content_files, find_content_file, read_file};

/// Reads posts from `{content_dir}/blog`
pub struct FsPostRepository {
    dir: PathBuf,
}

impl FsPostRepository {
    pub fn new(content_dir: impl AsRef<Path>) -> Self {
        Self {
            dir: content_dir.as_ref().join("blog"),
        }
    }

    async fn load(&self, slug: &str, path: &Path) -> Result<Post, DomainError> {
        let source = read_file(path).await?;
        parse_post(slug, &source)
    }
}

/// Build a post from a file's source
pub fn parse_post(slug: &str, source: &str) -> Result<Post, DomainError> {
    let (meta, body): (PostFrontMatter, _) = front_matter::parse(source)?;

    Ok(Post {
        slug: slug.to_string(),
        title: meta.title.unwrap_or_else(|| slug.to_string()),
        date: meta.date.as_deref().and_then(front_matter::parse_date),
        excerpt: meta.excerpt.unwrap_or_default(),
        tags: meta.tags,
        social_image: meta.social_image,
        linkedin_post: meta.linkedin_post,
        published: meta.published.unwrap_or(true),
        reading_time: reading_time(body),
        content: body.to_string(),
    })
}

#[async_trait]
impl PostRepository for FsPostRepository {
    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let mut posts = Vec::new();
        for (slug, path) in content_files(&self.dir).await? {
            match self.load(&slug, &path).await {
                Ok(post) => posts.push(post),
                Err(e) => {
                    tracing::warn!(error = %e, path = %path.display(), "Skipping unreadable post");
                }
            }
        }
        Ok(posts)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, DomainError> {
        match find_content_file(&self.dir, slug).await {
            Some(path) => self.load(slug, &path).await.map(Some),
            None => Ok(None),
        }
    }
}
