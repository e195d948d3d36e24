//! Handler for the shortening form submission.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::IntoResponse, response::Response};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::flash;

/// Message shown when a custom code is already in use.
pub const CODE_TAKEN_MESSAGE: &str = "Custom code already exists. Try another one.";

/// Fields posted by the form on `templates/index.html`.
///
/// Missing fields deserialize as empty strings.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub original_url: String,
    #[serde(default)]
    pub custom_code: String,
}

impl ShortenForm {
    /// The destination URL with surrounding whitespace removed.
    pub fn original_url(&self) -> &str {
        self.original_url.trim()
    }

    /// The custom code, or `None` when the field was left blank.
    pub fn custom_code(&self) -> Option<&str> {
        Some(self.custom_code.trim()).filter(|code| !code.is_empty())
    }
}

/// Template for the result page.
///
/// Renders `templates/created.html` with the short link, the original URL and
/// the code.
#[derive(Template, WebTemplate)]
#[template(path = "created.html")]
pub struct CreatedTemplate {
    pub short: String,
    pub original: String,
    pub code: String,
}

/// Creates a short link from the submitted form.
///
/// # Endpoint
///
/// `POST /`
///
/// # Responses
///
/// - **200 OK**: result page showing the short link
/// - **303 See Other** to `/`: the URL or custom code was rejected, or the
///   custom code is taken; the reason is queued as a flash message
///
/// # Errors
///
/// Store failures and code-space exhaustion are returned as [`AppError`].
pub async fn shorten_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Result<Response, AppError> {
    let result = state
        .link_service
        .create_short_link(form.original_url(), form.custom_code())
        .await;

    match result {
        Ok(link) => Ok(CreatedTemplate {
            short: state.link_service.short_url(&link.code),
            original: link.original_url,
            code: link.code,
        }
        .into_response()),
        Err(AppError::CodeConflict { .. }) => Ok(flash::redirect_with("/", CODE_TAKEN_MESSAGE)),
        Err(AppError::Validation(message)) => Ok(flash::redirect_with("/", &message)),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_trims_fields() {
        let form = ShortenForm {
            original_url: "  https://example.com \n".to_string(),
            custom_code: " promo ".to_string(),
        };

        assert_eq!(form.original_url(), "https://example.com");
        assert_eq!(form.custom_code(), Some("promo"));
    }

    #[test]
    fn test_blank_custom_code_means_random() {
        let form = ShortenForm {
            original_url: "https://example.com".to_string(),
            custom_code: "   ".to_string(),
        };

        assert_eq!(form.custom_code(), None);
        assert_eq!(ShortenForm::default().custom_code(), None);
    }
}
