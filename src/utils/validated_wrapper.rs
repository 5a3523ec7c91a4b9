use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use validator::{Validate, ValidationErrors};

use crate::error::CatalogError;
use crate::utils::api_response::ValidationErrorDetail;

/// JSON body that has passed its `validator` rules.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: serde::de::DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = CatalogError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|err| CatalogError::InvalidJson(err.body_text()))?;

        payload
            .validate()
            .map_err(|e| CatalogError::Validation(map_validation_errors(&e)))?;

        Ok(ValidatedJson(payload))
    }
}

/// Path segments deserialized into `T`; a segment that does not parse is
/// answered with the JSON envelope instead of axum's plain-text rejection.
pub struct PathParams<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParams<T>
where
    T: serde::de::DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = CatalogError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|err| CatalogError::InvalidPath(err.body_text()))?;

        Ok(PathParams(value))
    }
}

fn map_validation_errors(errors: &ValidationErrors) -> Vec<ValidationErrorDetail> {
    let mut details: Vec<ValidationErrorDetail> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, kinds)| {
            kinds.iter().map(move |err| ValidationErrorDetail {
                field: field.to_string(),
                title: err.code.to_string(),
                message: err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Invalid value".to_string()),
            })
        })
        .collect();

    // field_errors() is backed by a HashMap
    details.sort_by(|a, b| a.field.cmp(&b.field));
    details
}
