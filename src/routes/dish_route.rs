use axum::{routing::{delete, get, post}, Router};

use crate::config::AppState;
use crate::handlers::dish_handler::*;
use crate::handlers::tag_handler::*;

pub fn dish_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_dishes_handler).post(create_dish_handler))
        .route("/search", get(search_dishes_handler))
        .route("/multiple", post(create_dishes_handler))
        .route(
            "/{id}",
            get(get_dish_handler).patch(update_dish_handler).delete(delete_dish_handler),
        )
        .route("/{id}/{axis}", get(list_dish_tags_handler).post(assign_tag_handler))
        .route("/{id}/{axis}/{tag_id}", delete(remove_tag_handler))
}
