use axum::{
    extract::{Query, State},
    response::IntoResponse,
};

use crate::config::AppState;
use crate::models::dish_model::*;
use crate::services::dish_service::DishService;
use crate::utils::api_response::ResponseBuilder;
use crate::utils::validated_wrapper::{PathParams, ValidatedJson};

pub async fn list_dishes_handler(State(state): State<AppState>) -> impl IntoResponse {
    match DishService::list_dishes(&state.db).await {
        Ok(res) => ResponseBuilder::success("DISHES_FETCHED", "Platillos obtenidos correctamente", res).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn search_dishes_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    match DishService::search_dishes(&state.db, &params).await {
        Ok(res) => ResponseBuilder::success("DISHES_FETCHED", "Platillos obtenidos correctamente", res).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_dish_handler(
    State(state): State<AppState>,
    PathParams(id): PathParams<i64>,
) -> impl IntoResponse {
    match DishService::get_dish(&state.db, id).await {
        Ok(res) => ResponseBuilder::success("DISH_FETCHED", "Platillo obtenido correctamente", res).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn create_dish_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateDishRequest>,
) -> impl IntoResponse {
    match DishService::create_dish(&state.db, payload).await {
        Ok(res) => ResponseBuilder::created("DISH_CREATED", "Platillo creado correctamente", res).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn create_dishes_handler(
    State(state): State<AppState>,
    ValidatedJson(CreateDishesRequest(payload)): ValidatedJson<CreateDishesRequest>,
) -> impl IntoResponse {
    match DishService::create_dishes(&state.db, payload).await {
        Ok(res) => ResponseBuilder::created("DISHES_CREATED", "Platillos creados correctamente", res).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn update_dish_handler(
    State(state): State<AppState>,
    PathParams(id): PathParams<i64>,
    ValidatedJson(payload): ValidatedJson<UpdateDishRequest>,
) -> impl IntoResponse {
    match DishService::update_dish(&state.db, id, payload).await {
        Ok(res) => ResponseBuilder::success("DISH_UPDATED", "Platillo actualizado correctamente", res).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn delete_dish_handler(
    State(state): State<AppState>,
    PathParams(id): PathParams<i64>,
) -> impl IntoResponse {
    match DishService::delete_dish(&state.db, id).await {
        Ok(()) => ResponseBuilder::done("DISH_DELETED", "Platillo eliminado correctamente").into_response(),
        Err(e) => e.into_response(),
    }
}
