//! Request extractors shared by handlers.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body extractor that validates the payload before the handler runs.
///
/// Malformed or missing bodies surface as a 400 (not axum's default
/// 415/422), and validation failures surface as one aggregated 400 naming
/// every offending field. No handler sees a payload that failed validation.
///
/// ```ignore
/// async fn create_category(
///     State(state): State<AppState>,
///     ValidatedJson(input): ValidatedJson<CreateCategory>,
/// ) -> AppResult<impl IntoResponse> { ... }
/// ```
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|err| AppError::BadRequest(err.body_text()))?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
