//! Admin post service
//!
//! Backs the admin post management table: filtering, search, column sorting,
//! pagination, deletes and CSV export.

use std::sync::Arc;

use crate::domain::entities::{AdminPost, AdminPostId, PostPage, PostQuery, MAX_PAGE_SIZE};
use crate::domain::ports::AdminPostRepository;
use crate::error::{AppError, DomainError};

/// CSV header row of the export
pub const CSV_HEADER: [&str; 5] = ["id", "title", "slug", "published", "created_at"];

/// Service for managing admin post rows
pub struct AdminPostService {
    posts: Arc<dyn AdminPostRepository>,
}

impl AdminPostService {
    pub fn new(posts: Arc<dyn AdminPostRepository>) -> Self {
        Self { posts }
    }

    /// Rows passing the query's filters, in the query's order
    async fn matching(&self, query: &PostQuery) -> Result<Vec<AdminPost>, AppError> {
        let mut rows: Vec<AdminPost> = self
            .posts
            .list()
            .await?
            .into_iter()
            .filter(|p| query.matches(p))
            .collect();
        rows.sort_by(|a, b| query.compare(a, b).then_with(|| a.slug.cmp(&b.slug)));
        Ok(rows)
    }

    /// One page of rows
    pub async fn query(&self, query: &PostQuery) -> Result<PostPage, AppError> {
        let page = query.page.max(1);
        let page_size = query.page_size.clamp(1, MAX_PAGE_SIZE);

        let rows = self.matching(query).await?;
        let total_count = rows.len();
        let items = rows
            .into_iter()
            .skip((page - 1).saturating_mul(page_size))
            .take(page_size)
            .collect();

        Ok(PostPage {
            items,
            total_count,
            page,
            page_size,
            total_pages: total_count.div_ceil(page_size),
        })
    }

    /// Delete a single row
    pub async fn delete(&self, id: &AdminPostId) -> Result<(), AppError> {
        if !self.posts.delete(id).await? {
            return Err(AppError::NotFound(format!("Post {} not found", id)));
        }
        tracing::info!(post_id = %id, "Admin post deleted");
        Ok(())
    }

    /// Delete the selected rows, returning how many were removed
    pub async fn bulk_delete(&self, ids: &[AdminPostId]) -> Result<usize, AppError> {
        if ids.is_empty() {
            return Err(DomainError::Validation("No posts selected".to_string()).into());
        }
        let deleted = self.posts.delete_many(ids).await?;
        tracing::info!(requested = ids.len(), deleted, "Admin posts bulk deleted");
        Ok(deleted)
    }

    /// Every row passing the query's filters as CSV, pagination ignored
    pub async fn export_csv(&self, query: &PostQuery) -> Result<String, AppError> {
        let rows = self.matching(query).await?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(CSV_HEADER)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        for row in &rows {
            writer
                .write_record([
                    row.id.to_string(),
                    row.title.clone(),
                    row.slug.clone(),
                    row.published.to_string(),
                    row.created_at.to_rfc3339(),
                ])
                .map_err(|e| AppError::Internal(e.to_string()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| AppError::Internal(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| AppError::Internal(e.to_string()))
    }
}
