//! Folio API Server
//!
//! Backend for a personal portfolio: serves blog posts and projects authored as
//! MDX files, delivers contact form messages by email behind a rate limit, and
//! exposes a small admin API for managing posts.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::HeaderValue,
    middleware,
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod error;
mod handlers;
mod render;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod integration_tests;

use adapters::{
    FsPostRepository, FsProjectRepository, InMemoryAdminPostRepository, InMemoryRateLimiter,
    LogEmailSender, ResendEmailSender, UpstashRateLimiter,
};
use app::{AdminPostService, ContactService, ContactSettings, ContentService};
use config::Config;
use domain::ports::{EmailSender, PostRepository, RateLimiter};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub content_service: Arc<ContentService>,
    pub contact_service: Arc<ContactService>,
    pub admin_service: Arc<AdminPostService>,
    pub config: Config,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router for the given state
pub fn build_router(state: AppState) -> Router {
    // Contact route: the service applies the per-client daily quota, the
    // governor layer additionally smooths bursts from a single socket peer
    let mut contact_routes = Router::new().route("/api/contact", post(handlers::submit_contact));

    if state.config.burst_limit_enabled {
        // 2 req/sec sustained, burst of 5
        match GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
        {
            Some(config) => {
                contact_routes = contact_routes.layer(GovernorLayer {
                    config: Arc::new(config),
                });
            }
            None => tracing::warn!("Invalid burst limit configuration, burst limiting disabled"),
        }
    }

    // Admin routes (bearer token)
    let admin_routes = Router::new()
        .route("/api/admin/posts", get(handlers::list_admin_posts))
        .route("/api/admin/posts/export", get(handlers::export_admin_posts))
        .route(
            "/api/admin/posts/bulk-delete",
            post(handlers::bulk_delete_admin_posts),
        )
        .route("/api/admin/posts/:id", delete(handlers::delete_admin_post))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::admin_auth_middleware,
        ));

    let cors = cors_layer(state.config.cors_allow_origin.as_deref());

    Router::new()
        // Health check (no auth)
        .route("/health", get(health))
        // Blog
        .route("/api/posts", get(handlers::list_posts))
        .route("/api/posts/tags", get(handlers::list_tags))
        .route("/api/posts/:slug", get(handlers::get_post))
        // Projects
        .route("/api/projects", get(handlers::list_projects))
        .route("/api/projects/:slug", get(handlers::get_project))
        .merge(contact_routes)
        .merge(admin_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(allow_origin: Option<&str>) -> CorsLayer {
    let origin = match allow_origin.map(HeaderValue::from_str) {
        Some(Ok(origin)) => AllowOrigin::exact(origin),
        Some(Err(_)) => {
            tracing::warn!("CORS_ALLOW_ORIGIN is not a valid header value, allowing any origin");
            AllowOrigin::from(Any)
        }
        None => AllowOrigin::from(Any),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,folio_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Folio API...");

    // Load configuration
    let config = Config::from_env();
    tracing::info!(
        content_dir = %config.content_dir.display(),
        upstash = config.upstash_enabled(),
        admin = config.admin_enabled(),
        "Configuration loaded"
    );

    // Content adapters
    let post_repo = Arc::new(FsPostRepository::new(&config.content_dir));
    let project_repo = Arc::new(FsProjectRepository::new(&config.content_dir));

    // Rate limiter: Upstash when configured, in-process otherwise
    let window = config.contact_rate_window();
    let limiter: Arc<dyn RateLimiter> = match (&config.upstash_url, &config.upstash_token) {
        (Some(url), Some(token)) => {
            tracing::info!("Using Upstash rate limiter");
            Arc::new(UpstashRateLimiter::new(
                url.clone(),
                token.clone(),
                config.rate_limit_prefix.clone(),
                config.contact_rate_limit,
                window,
            ))
        }
        _ => {
            tracing::warn!("Upstash not configured, using in-process rate limiter");
            Arc::new(InMemoryRateLimiter::new(config.contact_rate_limit, window))
        }
    };

    // Email: Resend when configured, log-only otherwise
    let mailer: Arc<dyn EmailSender> = match &config.resend_api_key {
        Some(key) => Arc::new(ResendEmailSender::new(
            config.resend_api_url.clone(),
            key.clone(),
        )),
        None => {
            tracing::warn!("RESEND_API_KEY not set, contact messages will only be logged");
            Arc::new(LogEmailSender)
        }
    };

    // Admin store is seeded from the blog content on startup
    let posts = post_repo
        .list()
        .await
        .context("Failed to load blog posts for the admin store")?;
    let admin_repo = Arc::new(InMemoryAdminPostRepository::from_posts(&posts, Utc::now()));
    tracing::info!(count = posts.len(), "Seeded admin post store");

    if !config.admin_enabled() {
        tracing::warn!("ADMIN_TOKEN not set, admin API is disabled");
    }

    // Create application services
    let content_service = Arc::new(ContentService::new(post_repo, project_repo));
    let contact_service = Arc::new(ContactService::new(
        limiter,
        mailer,
        ContactSettings {
            from: config.contact_from.clone(),
            to: config.contact_to.clone(),
        },
    ));
    let admin_service = Arc::new(AdminPostService::new(admin_repo));

    // Create app state
    let state = AppState {
        content_service,
        contact_service,
        admin_service,
        config: config.clone(),
    };

    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
