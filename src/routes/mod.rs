use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppState;
use crate::handlers::health_check_handler;

pub mod dish_route;
pub mod tag_route;

pub fn create_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/platillos", dish_route::dish_routes())
        .route("/api/health", get(health_check_handler))
        .merge(tag_route::tag_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
