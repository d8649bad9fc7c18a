//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST     /submit` - Shorten a URL (shared secret)
//! - `GET|HEAD /{slug}` - Permanent redirect (public)
//! - anything else      - `404`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use axum::Router;

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    api::routes::link_routes()
        .with_state(state)
        .layer(tracing::layer())
}
