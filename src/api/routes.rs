//! API route configuration.

use axum::{Router, routing::post};

use crate::api::handlers::{redirect_handler, submit_handler};
use crate::state::AppState;

/// Link routes.
///
/// # Endpoints
///
/// - `POST     /submit` - Create (or reuse) a short link; shared secret required
/// - `GET|HEAD /{slug}` - Redirect to the stored URL
///
/// Every other method or path ends in `redirect_handler`, which answers
/// `404` unless the request is a `GET`/`HEAD` for a known slug. Notably
/// `GET /submit` resolves the slug `submit`.
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/submit", post(submit_handler).fallback(redirect_handler))
        .fallback(redirect_handler)
}
