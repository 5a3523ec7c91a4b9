pub mod dish_handler;
pub mod tag_handler;

use axum::{extract::State, response::IntoResponse};
use chrono::Utc;

use crate::config::AppState;
use crate::error::CatalogError;
use crate::utils::api_response::ResponseBuilder;

pub async fn health_check_handler(State(state): State<AppState>) -> impl IntoResponse {
    if let Err(e) = state.db.ping().await {
        return CatalogError::from(e).into_response();
    }

    ResponseBuilder::success(
        "HEALTH_CHECK_SUCCESS",
        "Server is healthy",
        serde_json::json!({
            "status": "up",
            "database": "up",
            "server_time": Utc::now().to_rfc3339(),
        }),
    )
    .into_response()
}
