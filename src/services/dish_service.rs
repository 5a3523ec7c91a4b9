use sea_orm::*;

use crate::entities::{dish, dish::Entity as Dish};
use crate::error::{CatalogError, CatalogResult};
use crate::models::dish_model::*;
use crate::services::dish_filter::Predicate;
use crate::services::dish_loader::{DishGraph, DishLoader, Include};
use crate::services::dish_projection;

pub struct DishService;

impl DishService {
    pub async fn load_dish_by_id(db: &DatabaseConnection, id: i64) -> CatalogResult<DishGraph> {
        DishLoader::new(Include::ALL).load_one(db, id).await
    }

    pub async fn load_all_dishes(db: &DatabaseConnection) -> CatalogResult<Vec<DishGraph>> {
        let query = Dish::find().order_by_asc(dish::Column::Id);
        Ok(DishLoader::new(Include::LOCAL).load(db, query).await?)
    }

    /// Unknown ids are skipped rather than reported.
    pub async fn load_dishes_by_ids(db: &DatabaseConnection, ids: &[i64]) -> CatalogResult<Vec<DishGraph>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = Dish::find()
            .filter(dish::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(dish::Column::Id);
        Ok(DishLoader::new(Include::LOCAL).load(db, query).await?)
    }

    pub async fn get_dish(db: &DatabaseConnection, id: i64) -> CatalogResult<DishDetailResponse> {
        let graph = Self::load_dish_by_id(db, id).await?;
        dish_projection::to_detail(graph)
    }

    pub async fn list_dishes(db: &DatabaseConnection) -> CatalogResult<Vec<DishListingResponse>> {
        Self::load_all_dishes(db)
            .await?
            .into_iter()
            .map(dish_projection::to_listing)
            .collect()
    }

    pub async fn search_dishes(
        db: &DatabaseConnection,
        params: &SearchParams,
    ) -> CatalogResult<Vec<DishSummaryResponse>> {
        let predicate = Predicate::from_search(params);
        tracing::debug!(?predicate, "searching dishes");

        let query = Dish::find()
            .filter(predicate.into_condition())
            .order_by_asc(dish::Column::Id);

        DishLoader::new(Include::LOCAL)
            .load(db, query)
            .await?
            .into_iter()
            .map(dish_projection::to_summary)
            .collect()
    }

    pub async fn create_dish(db: &DatabaseConnection, payload: CreateDishRequest) -> CatalogResult<dish::Model> {
        let saved = Self::new_dish(payload).insert(db).await?;
        tracing::info!(dish_id = saved.id, "dish created");
        Ok(saved)
    }

    /// Inserts the whole batch in one transaction; any failure rolls every row back.
    pub async fn create_dishes(
        db: &DatabaseConnection,
        payload: Vec<CreateDishRequest>,
    ) -> CatalogResult<Vec<dish::Model>> {
        if payload.is_empty() {
            return Ok(Vec::new());
        }

        let txn = db.begin().await?;

        let mut created = Vec::with_capacity(payload.len());
        for item in payload {
            created.push(Self::new_dish(item).insert(&txn).await?);
        }

        txn.commit().await?;
        tracing::info!(count = created.len(), "dishes created");

        Ok(created)
    }

    pub async fn update_dish(
        db: &DatabaseConnection,
        id: i64,
        payload: UpdateDishRequest,
    ) -> CatalogResult<dish::Model> {
        if payload.is_empty() {
            return Dish::find_by_id(id)
                .one(db)
                .await?
                .ok_or(CatalogError::NotFound("Platillo"));
        }

        let mut active: dish::ActiveModel = Default::default();
        if let Some(name) = payload.name {
            active.name = Set(name);
        }
        if let Some(description) = payload.description {
            active.description = Set(description);
        }
        if let Some(photo_url) = payload.photo_url {
            active.photo_url = Set(photo_url);
        }
        if let Some(price) = payload.price {
            active.price = Set(price);
        }
        if let Some(local_id) = payload.local_id {
            active.local_id = Set(local_id);
        }

        let txn = db.begin().await?;

        let result = Dish::update_many()
            .set(active)
            .filter(dish::Column::Id.eq(id))
            .exec(&txn)
            .await?;

        if result.rows_affected != 1 {
            return Err(CatalogError::NotFound("Platillo"));
        }

        let updated = Dish::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(CatalogError::NotFound("Platillo"))?;

        txn.commit().await?;

        Ok(updated)
    }

    pub async fn delete_dish(db: &DatabaseConnection, id: i64) -> CatalogResult<()> {
        let result = Dish::delete_many()
            .filter(dish::Column::Id.eq(id))
            .exec(db)
            .await?;

        if result.rows_affected != 1 {
            return Err(CatalogError::NotFound("Platillo"));
        }

        tracing::info!(dish_id = id, "dish deleted");
        Ok(())
    }

    fn new_dish(payload: CreateDishRequest) -> dish::ActiveModel {
        dish::ActiveModel {
            id: NotSet,
            name: Set(payload.name),
            description: Set(payload.description),
            photo_url: Set(payload.photo_url),
            price: Set(payload.price),
            local_id: Set(payload.local_id),
        }
    }
}
