//! Blog post handlers
//!
//! Public endpoints for reading blog content.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;

use crate::app::RenderedPost;
use crate::domain::entities::PostSummary;
use crate::error::AppError;
use crate::AppState;

/// Query parameters for listing posts
#[derive(Debug, Default, Deserialize)]
pub struct ListPostsQuery {
    /// Only posts carrying this tag
    pub tag: Option<String>,
}

/// GET /api/posts
///
/// List published posts, newest first.
pub async fn list_posts(
    State(state): State<AppState>,
    query: Result<Query<ListPostsQuery>, QueryRejection>,
) -> Result<Json<Vec<PostSummary>>, AppError> {
    let Query(query) = query?;
    let posts = match query.tag.as_deref().filter(|t| !t.is_empty()) {
        Some(tag) => state.content_service.posts_by_tag(tag).await?,
        None => state.content_service.list_posts().await?,
    };
    Ok(Json(posts))
}

/// GET /api/posts/tags
///
/// All tags used by published posts.
pub async fn list_tags(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(state.content_service.all_tags().await?))
}

/// GET /api/posts/:slug
///
/// A single post with its body rendered to HTML.
pub async fn get_post(
    State(state): State<AppState>,
    slug: Result<Path<String>, PathRejection>,
) -> Result<Json<RenderedPost>, AppError> {
    let Path(slug) = slug?;
    Ok(Json(state.content_service.get_post(&slug).await?))
}
