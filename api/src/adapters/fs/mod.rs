//! Filesystem adapter
//!
//! Reads blog posts and projects from the content directory.

pub mod front_matter;
pub mod post_repo;
pub mod project_repo;

use std::path::{Path, PathBuf};

use crate::error::DomainError;

pub use post_repo::FsPostRepository;
pub use project_repo::FsProjectRepository;

/// File extensions recognised as content
const EXTENSIONS: [&str; 2] = ["mdx", "md"];

/// Slugs map directly onto file names, so only a safe character set is allowed
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= 200
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

/// List `(slug, path)` for every content file in `dir`.
///
/// A missing directory is treated as empty. Files whose stem is not a valid
/// slug are skipped, so every listed slug can be fetched back.
pub(crate) async fn content_files(dir: &Path) -> Result<Vec<(String, PathBuf)>, DomainError> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(dir = %dir.display(), "Content directory missing");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(DomainError::Content(format!(
                "Failed to read {}: {}",
                dir.display(),
                e
            )))
        }
    };

    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| DomainError::Content(e.to_string()))?
    {
        let path = entry.path();
        let is_content = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| EXTENSIONS.contains(&ext));
        if !is_content {
            continue;
        }
        match path.file_stem().and_then(|s| s.to_str()) {
            Some(slug) if is_valid_slug(slug) => files.push((slug.to_string(), path.clone())),
            _ => {
                tracing::warn!(path = %path.display(), "Skipping content file with invalid slug");
            }
        }
    }

    Ok(files)
}

/// Locate the file backing `slug`, trying each extension in order
pub(crate) async fn find_content_file(dir: &Path, slug: &str) -> Option<PathBuf> {
    if !is_valid_slug(slug) {
        return None;
    }
    for ext in EXTENSIONS {
        let path = dir.join(format!("{}.{}", slug, ext));
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return Some(path);
        }
    }
    None
}

pub(crate) async fn read_file(path: &Path) -> Result<String, DomainError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| DomainError::Content(format!("Failed to read {}: {}", path.display(), e)))
}
