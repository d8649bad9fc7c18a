//! Handler for the link submission endpoint.

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
};
use tracing::debug;

use crate::api::dto::SubmitForm;
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL.
///
/// # Endpoint
///
/// `POST /submit`
///
/// # Form Fields
///
/// - `secret` - shared secret (required)
/// - `url` - target URL (required, non-empty)
/// - `slug` - desired slug (optional)
///
/// # Response
///
/// `200 OK` with the short URL as plain text, e.g. `http://localhost/abc12`.
/// Resubmitting a known URL returns its existing short URL.
///
/// # Errors
///
/// Returns `401 Not authorized` for a wrong secret or an empty URL. A body
/// that is not a form is treated as an empty form.
pub async fn submit_handler(
    State(state): State<AppState>,
    form: Result<Form<SubmitForm>, FormRejection>,
) -> Result<String, AppError> {
    let form = form
        .map(|Form(form)| form)
        .unwrap_or_else(|rejection| {
            debug!(%rejection, "Unreadable submission form");
            SubmitForm::default()
        });

    state
        .link_service
        .submit(&form.secret, form.url, form.slug)
        .await
}
