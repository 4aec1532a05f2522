pub mod debug;
pub mod health;
pub mod items;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /items                 list, create
/// /items/{id}            get, update, delete
///
/// /debug/database        database diagnostics
/// /debug/prisma          alias of /debug/database
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/items", items::router())
        .nest("/debug", debug::router())
}
