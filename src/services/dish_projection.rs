use std::collections::HashSet;

use crate::entities::{Axis, TagRef};
use crate::error::{CatalogError, CatalogResult};
use crate::models::dish_model::{
    DishDetailResponse, DishListingResponse, DishSummaryResponse, LocalResponse,
};
use crate::services::dish_loader::DishGraph;

pub fn to_detail(graph: DishGraph) -> CatalogResult<DishDetailResponse> {
    let categorias = tag_names(&graph, Axis::Categorias)?;
    let etiquetas = tag_names(&graph, Axis::Etiquetas)?;
    let ingredientes = tag_names(&graph, Axis::Ingredientes)?;
    let local = graph.local.ok_or(CatalogError::MissingRelation("local"))?;
    let dish = graph.dish;

    Ok(DishDetailResponse {
        name: dish.name,
        description: dish.description,
        photo_url: dish.photo_url,
        price: dish.price,
        local: local.into(),
        categorias,
        etiquetas,
        ingredientes,
    })
}

pub fn to_summary(graph: DishGraph) -> CatalogResult<DishSummaryResponse> {
    let local = graph.local.ok_or(CatalogError::MissingRelation("local"))?;

    Ok(DishSummaryResponse {
        id: graph.dish.id,
        name: graph.dish.name,
        price: graph.dish.price,
        local: local.name,
        photo_url: graph.dish.photo_url,
    })
}

pub fn to_listing(graph: DishGraph) -> CatalogResult<DishListingResponse> {
    let local = graph.local.ok_or(CatalogError::MissingRelation("local"))?;

    Ok(DishListingResponse {
        dish: graph.dish,
        local: LocalResponse::from(local),
    })
}

/// Names on one axis in store order, first occurrence wins.
fn tag_names(graph: &DishGraph, axis: Axis) -> CatalogResult<Vec<String>> {
    let tags = graph.axis(axis).ok_or(CatalogError::MissingRelation(axis.as_str()))?;
    Ok(unique_names(tags))
}

fn unique_names(tags: &[TagRef]) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.iter()
        .filter(|tag| seen.insert(tag.name.as_str()))
        .map(|tag| tag.name.clone())
        .collect()
}
