//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{health_handler, index_handler, redirect_handler, shorten_handler};
use axum::{Router, routing::get};

/// All public routes. No route requires authentication.
///
/// # Endpoints
///
/// - `GET  /`         - Shortening form
/// - `POST /`         - Create a short link
/// - `GET  /health`   - Health check
/// - `GET  /{code}`   - Redirect to the stored URL
///
/// `/health` is a static segment and wins over `/{code}`; the code generator
/// refuses it as a custom code.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler).post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
}
