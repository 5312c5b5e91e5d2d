use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use stencil_core::error::CoreError;
use stencil_db::repositories::RepoError;
use validator::ValidationErrors;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] as the single status-mapping boundary:
/// client-caused failures map to 400, everything else to 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `stencil_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage error from the repository layer.
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),

    /// One or more request fields failed validation.
    #[error("Validation failed")]
    Validation(#[from] ValidationErrors),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A remote resource could not be fetched for a streaming endpoint.
    #[error("Upstream fetch failed: {0}")]
    Upstream(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                // Not-found is caused by a client-supplied id, so it maps to
                // 400 rather than 404.
                CoreError::NotFound { entity, id } => (
                    StatusCode::BAD_REQUEST,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Storage errors ---
            AppError::Repo(err) => {
                tracing::error!(error = %err, "Repository error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            // --- Validation errors (aggregated field list) ---
            AppError::Validation(errors) => return validation_response(errors),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),

            AppError::Upstream(msg) => {
                tracing::error!(error = %msg, "Upstream fetch failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UPSTREAM_ERROR",
                    "Failed to fetch remote resource".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Build the aggregated 400 response for failed validation.
///
/// Every offending field is reported in one response; no valid fields are
/// applied. Field names use their wire (camelCase) form.
fn validation_response(errors: &ValidationErrors) -> Response {
    let mut fields = Vec::new();
    for (field, errs) in errors.field_errors() {
        let field = wire_field(field.as_ref());
        for err in errs.iter() {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{field} is invalid"));
            fields.push(json!({ "field": field.as_str(), "message": message }));
        }
    }

    let body = json!({
        "error": "Validation failed",
        "code": "VALIDATION_ERROR",
        "errors": fields,
    });

    (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
}

/// Convert a DTO field name to its wire form.
///
/// The DTOs rename to camelCase on the wire; validator reports Rust field
/// names, so error payloads convert back (`thumbnail_url` -> `thumbnailUrl`).
fn wire_field(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
