use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Envelope shared by every endpoint.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Debug, Serialize)]
pub struct ValidationErrorDetail {
    pub field: String,
    pub title: String,   // validator code, e.g. "length", "positive_price"
    pub message: String,
}

/// HTTP status paired with its envelope.
pub struct Envelope<T>(pub StatusCode, pub ApiResponse<T>);

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.0, Json(self.1)).into_response()
    }
}

pub struct ResponseBuilder;

impl ResponseBuilder {
    fn build<T>(
        status_code: StatusCode,
        code: &'static str,
        message: impl Into<String>,
        data: Option<T>,
    ) -> Envelope<T> {
        let status = if status_code.is_success() { "success" } else { "error" };
        Envelope(
            status_code,
            ApiResponse { status, code, message: message.into(), data },
        )
    }

    pub fn success<T: Serialize>(code: &'static str, message: &str, data: T) -> Envelope<T> {
        Self::build(StatusCode::OK, code, message, Some(data))
    }

    pub fn created<T: Serialize>(code: &'static str, message: &str, data: T) -> Envelope<T> {
        Self::build(StatusCode::CREATED, code, message, Some(data))
    }

    /// Success without a payload (e.g. deletions).
    pub fn done(code: &'static str, message: &str) -> Envelope<()> {
        Self::build(StatusCode::OK, code, message, None)
    }

    pub fn error(status_code: StatusCode, code: &'static str, message: impl Into<String>) -> Envelope<()> {
        Self::build(status_code, code, message, None)
    }

    pub fn fail_with_data<T: Serialize>(
        status_code: StatusCode,
        code: &'static str,
        message: &str,
        data: T,
    ) -> Envelope<T> {
        Self::build(status_code, code, message, Some(data))
    }
}
