//! Route definitions. Handlers live in [`crate::handlers`].

pub mod categories;
pub mod health;
pub mod templates;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// ```text
/// /categories                 GET list, POST create
/// /categories/{id}            GET, PUT, DELETE
/// /templates                  GET list, POST create
/// /templates/{id}             GET (category resolved), PUT, DELETE
/// /templates/{id}/thumbnail   GET stream remote thumbnail
/// /templates/{id}/asset       GET stream remote asset
/// ```
///
/// Anything else falls through to axum's default 404.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/templates", templates::router())
}
