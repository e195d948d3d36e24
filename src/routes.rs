//! Top-level router configuration.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling (applied in
//!   [`crate::server::run`], outside the router, so it runs before routing)

use crate::state::AppState;
use crate::web;
use crate::web::middleware::tracing;
use axum::Router;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    web::routes::public_routes()
        .with_state(state)
        .layer(tracing::layer())
}
