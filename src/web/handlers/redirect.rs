//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::location_for;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the code
/// 2. Record the hit (best-effort, failures are only logged)
/// 3. Return 302 Found with the stored URL in `Location`, converted to its
///    ASCII form when it contains non-ASCII characters
///
/// # Errors
///
/// Returns 404 Not Found with body `not found` if the code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.resolve(&code).await?;

    let location = location_for(&link.original_url)
        .map_err(|e| AppError::internal(format!("Stored URL for '{code}' is invalid: {e}")))?;
    let location = HeaderValue::from_str(&location)
        .map_err(|_| AppError::internal("Stored URL is not a valid Location header"))?;

    tracing::debug!(%code, hits = link.hit_count, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
