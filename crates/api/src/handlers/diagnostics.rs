//! Database diagnostics handler.
//!
//! Operational only: reports whether the database is reachable and how
//! many items it holds, with the connection string masked.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use diary_core::database_url::mask_database_url;
use diary_db::repositories::ItemRepo;
use serde::Serialize;

use crate::state::AppState;

/// Diagnostics response payload.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DatabaseDiagnostics {
    #[serde(rename_all = "camelCase")]
    Success {
        database_url: String,
        item_count: i64,
    },
    Error {
        message: String,
    },
}

/// GET /api/debug/database
pub async fn database(
    State(state): State<AppState>,
) -> (StatusCode, Json<DatabaseDiagnostics>) {
    match ItemRepo::count(&state.pool).await {
        Ok(item_count) => (
            StatusCode::OK,
            Json(DatabaseDiagnostics::Success {
                database_url: mask_database_url(&state.config.database_url),
                item_count,
            }),
        ),
        Err(err) => {
            tracing::error!(error = ?err, "Database diagnostics failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DatabaseDiagnostics::Error {
                    message: err.to_string(),
                }),
            )
        }
    }
}
