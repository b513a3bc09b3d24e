//! Project handlers
//!
//! Public endpoints for the portfolio projects.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;

use crate::app::RenderedProject;
use crate::domain::entities::Project;
use crate::error::AppError;
use crate::AppState;

/// Query parameters for listing projects
#[derive(Debug, Default, Deserialize)]
pub struct ListProjectsQuery {
    /// Only projects carrying this tag (case-insensitive)
    pub tag: Option<String>,
    /// Only featured projects
    #[serde(default)]
    pub featured: bool,
}

/// GET /api/projects
///
/// List projects, newest first.
pub async fn list_projects(
    State(state): State<AppState>,
    query: Result<Query<ListProjectsQuery>, QueryRejection>,
) -> Result<Json<Vec<Project>>, AppError> {
    let Query(query) = query?;
    let service = &state.content_service;
    let projects = match query.tag.as_deref().filter(|t| !t.is_empty()) {
        Some(tag) => {
            let mut projects = service.projects_by_tag(tag).await?;
            if query.featured {
                projects.retain(|p| p.featured);
            }
            projects
        }
        None if query.featured => service.featured_projects().await?,
        None => service.list_projects().await?,
    };
    Ok(Json(projects))
}

/// GET /api/projects/:slug
///
/// Project details with rendered long-form content.
pub async fn get_project(
    State(state): State<AppState>,
    slug: Result<Path<String>, PathRejection>,
) -> Result<Json<RenderedProject>, AppError> {
    let Path(slug) = slug?;
    Ok(Json(state.content_service.get_project(&slug).await?))
}
