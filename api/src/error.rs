//! Unified error types for the Folio API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `RateLimitError`: Rate limiter backend errors
//! - `EmailError`: Email provider client errors
//! - `AppError`: Application layer errors (wraps the others for HTTP responses)

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Content error: {0}")]
    Content(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Rate limiter backend errors
#[derive(Debug, Error)]
pub enum RateLimitError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Limiter backend error: {0}")]
    Backend(String),
}

/// Email provider errors
#[derive(Debug, Error)]
pub enum EmailError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Unauthorized - invalid API key")]
    Unauthorized,

    #[error("Rate limited by email provider")]
    RateLimited,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Rate limiter error: {0}")]
    RateLimit(#[from] RateLimitError),

    #[error("Email error: {0}")]
    Email(#[from] EmailError),

    #[error("Too many requests, {remaining} remaining until {reset}")]
    RateLimited {
        limit: u32,
        remaining: u32,
        reset: DateTime<Utc>,
    },

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

// Extractor rejections are client errors and use the same JSON body as
// every other failure
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut headers = HeaderMap::new();

        let (status, error, details) = match &self {
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg.clone()))
            }
            AppError::Domain(DomainError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::Content(msg)) => {
                tracing::error!("Content error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Domain(DomainError::Internal(msg)) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::RateLimit(e) => {
                tracing::error!("Rate limiter error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to send message",
                    None,
                )
            }
            AppError::Email(e) => {
                tracing::error!("Email error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to send message",
                    None,
                )
            }
            AppError::RateLimited {
                limit,
                remaining,
                reset,
            } => {
                let retry_after = (*reset - Utc::now()).num_seconds().max(0);
                insert_header(&mut headers, header::RETRY_AFTER, retry_after);
                insert_header(&mut headers, "x-ratelimit-limit", limit);
                insert_header(&mut headers, "x-ratelimit-remaining", remaining);
                insert_header(&mut headers, "x-ratelimit-reset", reset.timestamp());
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    "Message limit exceeded. Please try again later.",
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized", None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, headers, body).into_response()
    }
}

fn insert_header<K, V>(headers: &mut HeaderMap, name: K, value: V)
where
    K: header::IntoHeaderName,
    V: ToString,
{
    if let Ok(value) = HeaderValue::from_str(&value.to_string()) {
        headers.insert(name, value);
    }
}
