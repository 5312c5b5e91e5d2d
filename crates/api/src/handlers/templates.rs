//! Handlers for the `/templates` resource.
//!
//! Besides plain CRUD, templates expose two streaming endpoints that proxy
//! the remote thumbnail/asset URL back to the client without buffering the
//! full payload in memory.

use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use stencil_core::error::CoreError;
use stencil_core::types::DocId;
use stencil_db::models::template::{CreateTemplate, Template, UpdateTemplate};
use stencil_db::repositories::TemplateRepo;
use stencil_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::handlers::client_supplied_id;
use crate::query::ListParams;
use crate::state::AppState;

/// GET /templates?name=&limit=&offset=
///
/// List templates. Listings carry the raw category reference id; a `name`
/// filter additionally constrains the listing to visible templates.
pub async fn list_templates(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let templates =
        TemplateRepo::list(&state.pool, params.filter(), params.limit, params.offset).await?;

    Ok(Json(templates))
}

/// GET /templates/{id}
///
/// Single-item reads resolve the category reference into the full category
/// document; an absent or dangling reference yields `category: null`.
pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
) -> AppResult<impl IntoResponse> {
    let template = TemplateRepo::find_with_category(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Template",
                id,
            })
        })?;

    Ok(Json(template))
}

/// POST /templates
pub async fn create_template(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTemplate>,
) -> AppResult<impl IntoResponse> {
    let id = client_supplied_id(input.id.as_deref());

    let template = TemplateRepo::create(&state.pool, id, &input).await?;

    tracing::info!(template_id = %template.id, "Template created");

    Ok((StatusCode::CREATED, Json(template)))
}

/// PUT /templates/{id}
///
/// Partial update: only fields present in the payload are modified. Any id
/// in the payload is discarded.
pub async fn update_template(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
    ValidatedJson(input): ValidatedJson<UpdateTemplate>,
) -> AppResult<impl IntoResponse> {
    let template = TemplateRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Template",
                id,
            })
        })?;

    tracing::info!(template_id = %id, "Template updated");

    Ok(Json(template))
}

/// DELETE /templates/{id}
///
/// Deleting an absent id is a client error, not a no-op.
pub async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TemplateRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id,
        }));
    }

    tracing::info!(template_id = %id, "Template deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /templates/{id}/thumbnail
///
/// Stream the template's remote thumbnail back to the client.
pub async fn stream_thumbnail(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
) -> AppResult<Response> {
    let template = find_template(&state.pool, id).await?;
    let url = template
        .thumbnail_url
        .ok_or_else(|| AppError::BadRequest(format!("Template {id} has no thumbnailUrl")))?;

    proxy_remote(&state.http, &url).await
}

/// GET /templates/{id}/asset
///
/// Stream the template's remote asset back to the client.
pub async fn stream_asset(
    State(state): State<AppState>,
    Path(id): Path<DocId>,
) -> AppResult<Response> {
    let template = find_template(&state.pool, id).await?;
    let url = template
        .asset_url
        .ok_or_else(|| AppError::BadRequest(format!("Template {id} has no assetUrl")))?;

    proxy_remote(&state.http, &url).await
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_template(pool: &DbPool, id: DocId) -> Result<Template, AppError> {
    TemplateRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Template",
                id,
            })
        })
}

/// Fetch `url` and forward its body without buffering the full payload.
///
/// A network failure or non-success remote status aborts with an upstream
/// error (500) before any body byte is sent.
async fn proxy_remote(client: &reqwest::Client, url: &str) -> AppResult<Response> {
    let upstream = client
        .get(url)
        .send()
        .await
        .map_err(|err| AppError::Upstream(err.to_string()))?;

    let status = upstream.status();
    if !status.is_success() {
        return Err(AppError::Upstream(format!("remote returned {status} for {url}")));
    }

    let mut builder = Response::builder().status(StatusCode::OK);
    if let Some(content_type) = upstream.headers().get(header::CONTENT_TYPE) {
        builder = builder.header(header::CONTENT_TYPE, content_type.clone());
    }
    if let Some(content_length) = upstream.headers().get(header::CONTENT_LENGTH) {
        builder = builder.header(header::CONTENT_LENGTH, content_length.clone());
    }

    builder
        .body(Body::from_stream(upstream.bytes_stream()))
        .map_err(|err| AppError::Core(CoreError::Internal(err.to_string())))
}
