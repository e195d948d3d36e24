//! Application error taxonomy and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Errors produced by services and repositories.
///
/// Validation and conflict errors are normally intercepted by the web form
/// handler and turned into a flash message; the [`IntoResponse`] mapping is the
/// fallback for every other call site.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Short code '{code}' is already taken")]
    CodeConflict { code: String },

    #[error("Short code '{code}' not found")]
    NotFound { code: String },

    #[error("Could not allocate a unique short code after {attempts} attempts")]
    ResourceExhausted { attempts: usize },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status used when the error reaches the client.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::CodeConflict { .. } => StatusCode::CONFLICT,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::ResourceExhausted { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            AppError::NotFound { .. } => "not found".to_string(),
            AppError::Database(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "Request failed");
                "Internal server error".to_string()
            }
            AppError::ResourceExhausted { .. } => {
                tracing::error!(error = %self, "Short code space exhausted");
                self.to_string()
            }
            _ => self.to_string(),
        };

        (status, body).into_response()
    }
}

/// Maps a store error to [`AppError::CodeConflict`] when it is a unique
/// violation, otherwise to [`AppError::Database`].
pub fn map_insert_error(e: sqlx::Error, code: &str) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::CodeConflict {
            code: code.to_string(),
        };
    }

    AppError::Database(e)
}
