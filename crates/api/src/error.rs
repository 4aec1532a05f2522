use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use diary_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Every failure a handler can hit is one of these variants, so nothing
/// escapes a handler unconverted. Implements [`IntoResponse`] to produce
/// consistent `{ "error": ..., "code": ... }` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error (validation, lookup miss) from `diary_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A request body that could not be read as JSON.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A failed database call.
    ///
    /// `context` is the client-facing message used when the database gave
    /// no native error code, e.g. "Error updating item".
    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// Anything else, e.g. a panicking handler. The message is logged,
    /// never returned.
    #[error("Internal error: {0}")]
    Unknown(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Build a `map_err` adapter tagging a database failure with the
    /// message to show when the database supplies no error code.
    pub fn store(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::Store { context, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Database errors ---
            AppError::Store { context, source } => {
                tracing::error!(error = ?source, context = %context, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORE_ERROR",
                    store_error_message(context, source),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Unknown(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        if status.is_client_error() {
            tracing::warn!(%status, code, error = %message, "Request rejected");
        }

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Client-facing message for a database failure.
///
/// Errors reported by the database server carry a SQLSTATE code and are
/// shown as `Database error <code>: <message>`. Everything else (row not
/// found, pool timeouts, I/O) falls back to the operation's context.
pub fn store_error_message(context: &str, err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db_err) => match db_err.code() {
            Some(code) => format!("Database error {code}: {}", db_err.message()),
            None => context.to_string(),
        },
        _ => context.to_string(),
    }
}
