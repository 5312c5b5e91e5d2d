//! Route definitions for the `/templates` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::templates;
use crate::state::AppState;

/// Template routes.
///
/// ```text
/// GET    /                -> list_templates (?name, limit, offset)
/// POST   /                -> create_template
/// GET    /{id}            -> get_template (category resolved)
/// PUT    /{id}            -> update_template
/// DELETE /{id}            -> delete_template
/// GET    /{id}/thumbnail  -> stream_thumbnail
/// GET    /{id}/asset      -> stream_asset
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(templates::list_templates).post(templates::create_template),
        )
        .route(
            "/{id}",
            get(templates::get_template)
                .put(templates::update_template)
                .delete(templates::delete_template),
        )
        .route("/{id}/thumbnail", get(templates::stream_thumbnail))
        .route("/{id}/asset", get(templates::stream_asset))
}
