//! Home page with the shortening form.

use askama::Template;
use askama_web::WebTemplate;
use axum::http::{HeaderMap, header::SET_COOKIE};
use axum::response::{IntoResponse, Response};

use crate::web::flash;

/// Template for the home page.
///
/// Renders `templates/index.html` with the URL form and any pending flash
/// message.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub flash: Option<String>,
}

/// Renders the shortening form.
///
/// # Endpoint
///
/// `GET /`
///
/// A pending flash message is shown once and its cookie cleared.
pub async fn index_handler(headers: HeaderMap) -> Response {
    match flash::read(&headers) {
        Some(message) => (
            [(SET_COOKIE, flash::clear_cookie())],
            IndexTemplate {
                flash: Some(message),
            },
        )
            .into_response(),
        None => IndexTemplate { flash: None }.into_response(),
    }
}
