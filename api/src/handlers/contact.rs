//! Contact handler
//!
//! The contact form endpoint.

use std::net::SocketAddr;

use axum::{
    extract::{rejection::JsonRejection, ConnectInfo, State},
    http::HeaderMap,
    Json,
};
use serde::Serialize;

use crate::domain::entities::ContactMessage;
use crate::error::AppError;
use crate::AppState;

/// Fallback identity when neither a forwarded header nor a peer address is known
const FALLBACK_CLIENT: &str = "127.0.0.1";

/// Response body for a delivered message
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub id: String,
    /// Messages the client may still send in the current window
    pub remaining: u32,
}

/// Identify the client for rate limiting: first `X-Forwarded-For` hop, then peer IP
pub fn client_key(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| FALLBACK_CLIENT.to_string())
}

/// POST /api/contact
///
/// Validate a contact message and forward it by email.
pub async fn submit_contact(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    payload: Result<Json<ContactMessage>, JsonRejection>,
) -> Result<Json<ContactResponse>, AppError> {
    let Json(message) = payload?;
    let client = client_key(&headers, connect_info.map(|ConnectInfo(addr)| addr));

    let receipt = state.contact_service.submit(&client, &message).await?;

    Ok(Json(ContactResponse {
        success: true,
        id: receipt.id,
        remaining: receipt.remaining,
    }))
}
