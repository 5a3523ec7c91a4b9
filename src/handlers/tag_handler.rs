use axum::{
    extract::State,
    response::IntoResponse,
};

use crate::config::AppState;
use crate::entities::Axis;
use crate::error::{CatalogError, CatalogResult};
use crate::models::dish_model::{AssignTagRequest, CreateTagRequest};
use crate::services::tagging_service::TaggingService;
use crate::utils::api_response::ResponseBuilder;
use crate::utils::validated_wrapper::{PathParams, ValidatedJson};

fn parse_axis(raw: &str) -> CatalogResult<Axis> {
    raw.parse().map_err(|_| CatalogError::NotFound("Recurso"))
}

pub async fn list_dish_tags_handler(
    State(state): State<AppState>,
    PathParams((dish_id, axis)): PathParams<(i64, String)>,
) -> impl IntoResponse {
    let axis = match parse_axis(&axis) {
        Ok(axis) => axis,
        Err(e) => return e.into_response(),
    };

    match TaggingService::list_dish_tags(&state.db, dish_id, axis).await {
        Ok(res) => ResponseBuilder::success("DISH_TAGS_FETCHED", "Etiquetas obtenidas correctamente", res).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn assign_tag_handler(
    State(state): State<AppState>,
    PathParams((dish_id, axis)): PathParams<(i64, String)>,
    ValidatedJson(payload): ValidatedJson<AssignTagRequest>,
) -> impl IntoResponse {
    let axis = match parse_axis(&axis) {
        Ok(axis) => axis,
        Err(e) => return e.into_response(),
    };

    match TaggingService::assign_tag(&state.db, dish_id, axis, payload.tag_id).await {
        Ok(res) => ResponseBuilder::created("TAG_ASSIGNED", "Etiqueta asignada correctamente", res).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn remove_tag_handler(
    State(state): State<AppState>,
    PathParams((dish_id, axis, tag_id)): PathParams<(i64, String, i64)>,
) -> impl IntoResponse {
    let axis = match parse_axis(&axis) {
        Ok(axis) => axis,
        Err(e) => return e.into_response(),
    };

    match TaggingService::remove_tag(&state.db, dish_id, axis, tag_id).await {
        Ok(()) => ResponseBuilder::done("TAG_REMOVED", "Etiqueta removida correctamente").into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn list_vocabulary_handler(
    State(state): State<AppState>,
    PathParams(axis): PathParams<String>,
) -> impl IntoResponse {
    let axis = match parse_axis(&axis) {
        Ok(axis) => axis,
        Err(e) => return e.into_response(),
    };

    match TaggingService::list_vocabulary(&state.db, axis).await {
        Ok(res) => ResponseBuilder::success("TAGS_FETCHED", "Vocabulario obtenido correctamente", res).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn create_vocabulary_tag_handler(
    State(state): State<AppState>,
    PathParams(axis): PathParams<String>,
    ValidatedJson(payload): ValidatedJson<CreateTagRequest>,
) -> impl IntoResponse {
    let axis = match parse_axis(&axis) {
        Ok(axis) => axis,
        Err(e) => return e.into_response(),
    };

    match TaggingService::create_vocabulary_tag(&state.db, axis, payload.name).await {
        Ok(res) => ResponseBuilder::created("TAG_CREATED", "Etiqueta creada correctamente", res).into_response(),
        Err(e) => e.into_response(),
    }
}
