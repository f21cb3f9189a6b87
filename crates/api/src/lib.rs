//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes under `/api`
//! - Session-cookie authentication middleware
//! - Request/response types per endpoint

pub mod middleware;
pub mod response;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use hearth_core::SessionStore;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Session authority.
    pub sessions: Arc<SessionStore>,
    /// Absolute session lifetime; also drives the cookie Max-Age.
    pub session_ttl: Duration,
    /// Whether the session cookie is marked `Secure`.
    pub cookie_secure: bool,
}

/// Creates the main application router.
///
/// When `static_dir` is set, the front-end assets in that directory are
/// served for non-API paths, with `index.html` as the fallback document.
pub fn create_router(state: AppState, static_dir: Option<&str>) -> Router {
    let router = Router::new().nest("/api", routes::api_routes_with_state(state.clone()));

    let router = match static_dir {
        Some(dir) => {
            let index = format!("{dir}/index.html");
            router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)))
        }
        None => router,
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
