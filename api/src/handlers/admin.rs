//! Admin handlers
//!
//! Post management endpoints behind the admin token.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{
    AdminPostId, PostPage, PostQuery, SortColumn, SortDirection, StatusFilter, DEFAULT_PAGE_SIZE,
};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for the post table
#[derive(Debug, Default, Deserialize)]
pub struct AdminPostsQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl AdminPostsQuery {
    pub fn into_post_query(self) -> Result<PostQuery, AppError> {
        fn parse<T: std::str::FromStr<Err = String> + Default>(
            raw: Option<String>,
        ) -> Result<T, AppError> {
            match raw.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
                Some(s) => s.parse().map_err(AppError::BadRequest),
                None => Ok(T::default()),
            }
        }

        Ok(PostQuery {
            search: self.search,
            status: parse::<StatusFilter>(self.status)?,
            sort: parse::<SortColumn>(self.sort)?,
            direction: parse::<SortDirection>(self.direction)?,
            page: self.page.unwrap_or(1),
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        })
    }
}

/// Request body for deleting a selection of posts
#[derive(Debug, Deserialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct BulkDeleteResponse {
    pub deleted: usize,
}

/// GET /api/admin/posts
///
/// Filtered, sorted, paginated post table.
pub async fn list_admin_posts(
    State(state): State<AppState>,
    query: Result<Query<AdminPostsQuery>, QueryRejection>,
) -> Result<Json<PostPage>, AppError> {
    let Query(query) = query?;
    let query = query.into_post_query()?;
    Ok(Json(state.admin_service.query(&query).await?))
}

/// DELETE /api/admin/posts/:id
pub async fn delete_admin_post(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    state.admin_service.delete(&AdminPostId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/admin/posts/bulk-delete
///
/// Delete the selected rows.
pub async fn bulk_delete_admin_posts(
    State(state): State<AppState>,
    request: Result<Json<BulkDeleteRequest>, JsonRejection>,
) -> Result<Json<BulkDeleteResponse>, AppError> {
    let Json(request) = request?;
    let ids: Vec<AdminPostId> = request.ids.into_iter().map(AdminPostId).collect();
    let deleted = state.admin_service.bulk_delete(&ids).await?;
    Ok(Json(BulkDeleteResponse { deleted }))
}

/// GET /api/admin/posts/export
///
/// Download the filtered table as CSV.
pub async fn export_admin_posts(
    State(state): State<AppState>,
    query: Result<Query<AdminPostsQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let query = query.into_post_query()?;
    let csv = state.admin_service.export_csv(&query).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"posts.csv\""),
        ],
        csv,
    ))
}
