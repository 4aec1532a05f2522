//! Route definitions for operational diagnostics.

use axum::routing::get;
use axum::Router;

use crate::handlers::diagnostics;
use crate::state::AppState;

/// Routes mounted at `/debug`.
///
/// `/prisma` is kept for clients written against the earlier deployment.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/database", get(diagnostics::database))
        .route("/prisma", get(diagnostics::database))
}
