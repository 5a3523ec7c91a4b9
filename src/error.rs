use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::utils::api_response::{ResponseBuilder, ValidationErrorDetail};

/// Failures surfaced by the catalog core. Nothing is recovered locally;
/// the HTTP layer turns each variant into an envelope.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{0} no encontrado")]
    NotFound(&'static str),

    #[error("validation failed")]
    Validation(Vec<ValidationErrorDetail>),

    #[error("invalid JSON body: {0}")]
    InvalidJson(String),

    #[error("invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("loaded dish is missing its {0} relation")]
    MissingRelation(&'static str),

    #[error("{0}")]
    Conflict(String),

    #[error("store error: {0}")]
    Store(#[from] DbErr),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            CatalogError::NotFound(_) => {
                ResponseBuilder::error(StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string()).into_response()
            }
            CatalogError::Validation(details) => ResponseBuilder::fail_with_data(
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Validation failed",
                details,
            )
            .into_response(),
            CatalogError::InvalidJson(ref reason) => ResponseBuilder::error(
                StatusCode::BAD_REQUEST,
                "INVALID_JSON",
                format!("Invalid JSON format: {reason}"),
            )
            .into_response(),
            CatalogError::InvalidPath(ref reason) => ResponseBuilder::error(
                StatusCode::BAD_REQUEST,
                "INVALID_PATH",
                format!("Invalid path parameter: {reason}"),
            )
            .into_response(),
            CatalogError::Conflict(ref message) => {
                ResponseBuilder::error(StatusCode::CONFLICT, "CONFLICT", message.clone()).into_response()
            }
            CatalogError::MissingRelation(_) => {
                tracing::error!(error = %self, "data integrity fault");
                internal_error()
            }
            CatalogError::Store(ref e) => {
                tracing::error!(error = %e, "database error");
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    ResponseBuilder::error(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", "Error interno del servidor")
        .into_response()
}
