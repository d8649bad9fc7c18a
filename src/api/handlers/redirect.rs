//! Handler for short URL redirects.

use axum::{
    extract::State,
    http::{HeaderValue, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use percent_encoding::{CONTROLS, percent_decode_str, utf8_percent_encode};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its stored URL.
///
/// # Endpoint
///
/// `GET /{slug}` and `HEAD /{slug}`. Mounted as the fallback, so every path
/// except `POST /submit` lands here; the whole percent-decoded path minus its
/// leading `/` is the slug.
///
/// # Response
///
/// `301 Moved Permanently` with `Location` set to the stored URL, with control
/// bytes and non-ASCII characters percent-encoded. HEAD gets the same headers.
///
/// # Errors
///
/// Returns `404 Not Found` for an unknown slug or any other method.
pub async fn redirect_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Response, AppError> {
    if method != Method::GET && method != Method::HEAD {
        return Err(AppError::NotFound);
    }

    let path = percent_decode_str(uri.path()).decode_utf8_lossy();
    let slug = path.strip_prefix('/').unwrap_or(&*path);

    let url = state.link_service.resolve(slug).await?;

    let location = location_header(&url).map_err(|e| {
        AppError::internal(format!("stored URL for {slug} is not a valid header: {e}"))
    })?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}

/// Encodes a stored URL as a `Location` value.
fn location_header(url: &str) -> Result<HeaderValue, header::InvalidHeaderValue> {
    HeaderValue::from_str(&utf8_percent_encode(url, CONTROLS).to_string())
}
