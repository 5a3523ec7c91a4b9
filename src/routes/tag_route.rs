use axum::{routing::get, Router};

use crate::config::AppState;
use crate::handlers::tag_handler::*;

/// Vocabulary endpoints, mounted at `/api/{axis}`.
pub fn tag_routes() -> Router<AppState> {
    Router::new().route(
        "/api/{axis}",
        get(list_vocabulary_handler).post(create_vocabulary_tag_handler),
    )
}
