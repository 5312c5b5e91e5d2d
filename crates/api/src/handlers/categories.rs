//! Handlers for the `/categories` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use stencil_core::error::CoreError;
use stencil_core::types::DocId;
use stencil_db::models::category::{CreateCategory, UpdateCategory};
use stencil_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::handlers::client_supplied_id;
use crate::query::ListParams;
use crate::state::AppState;

/// GET /categories?name=&limit=&offset=
///
/// List categories. A `name` filter additionally constrains the listing to
/// visible categories; an unfiltered listing returns everything.
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let categories =
        CategoryRepo::list(&state.pool, params.filter(), params.limit, params.offset).await?;

    Ok(Json(categories))
}

/// GET /categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Category",
                id,
            })
        })?;

    Ok(Json(category))
}

/// POST /categories
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    let id = client_supplied_id(input.id.as_deref());

    let category = CategoryRepo::create(&state.pool, id, &input).await?;

    tracing::info!(category_id = %category.id, "Category created");

    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /categories/{id}
///
/// Partial update: only fields present in the payload are modified. Any id
/// in the payload is discarded.
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
    ValidatedJson(input): ValidatedJson<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Category",
                id,
            })
        })?;

    tracing::info!(category_id = %id, "Category updated");

    Ok(Json(category))
}

/// DELETE /categories/{id}
///
/// Deleting an absent id is a client error, not a no-op.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CategoryRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }));
    }

    tracing::info!(category_id = %id, "Category deleted");

    Ok(StatusCode::NO_CONTENT)
}
