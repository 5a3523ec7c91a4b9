//! Tag assignment on dishes and maintenance of the three tag vocabularies.

use sea_orm::*;

use crate::entities::{
    category, dish, dish_category, dish_ingredient, dish_label, ingredient, label, Axis, TagEntity,
    TagLink, TagRef,
};
use crate::error::{CatalogError, CatalogResult};
use crate::services::dish_loader;

pub struct TaggingService;

impl TaggingService {
    pub async fn list_dish_tags(db: &DatabaseConnection, dish_id: i64, axis: Axis) -> CatalogResult<Vec<TagRef>> {
        ensure_dish_exists(db, dish_id).await?;

        let mut by_dish = dish_loader::load_axis(db, axis, &[dish_id]).await?;
        Ok(by_dish.remove(&dish_id).unwrap_or_default())
    }

    pub async fn assign_tag(
        db: &DatabaseConnection,
        dish_id: i64,
        axis: Axis,
        tag_id: i64,
    ) -> CatalogResult<TagRef> {
        let txn = db.begin().await?;
        ensure_dish_exists(&txn, dish_id).await?;

        let tag = match axis {
            Axis::Categorias => link::<dish_category::Entity, _>(&txn, dish_id, tag_id).await?,
            Axis::Etiquetas => link::<dish_label::Entity, _>(&txn, dish_id, tag_id).await?,
            Axis::Ingredientes => link::<dish_ingredient::Entity, _>(&txn, dish_id, tag_id).await?,
        };

        txn.commit().await?;
        tracing::info!(dish_id, tag_id, %axis, "tag assigned");

        Ok(tag)
    }

    pub async fn remove_tag(db: &DatabaseConnection, dish_id: i64, axis: Axis, tag_id: i64) -> CatalogResult<()> {
        let removed = match axis {
            Axis::Categorias => unlink::<dish_category::Entity, _>(db, dish_id, tag_id).await?,
            Axis::Etiquetas => unlink::<dish_label::Entity, _>(db, dish_id, tag_id).await?,
            Axis::Ingredientes => unlink::<dish_ingredient::Entity, _>(db, dish_id, tag_id).await?,
        };

        if removed != 1 {
            return Err(CatalogError::NotFound("Etiquetado"));
        }

        tracing::info!(dish_id, tag_id, %axis, "tag removed");
        Ok(())
    }

    pub async fn list_vocabulary(db: &DatabaseConnection, axis: Axis) -> CatalogResult<Vec<TagRef>> {
        let tags = match axis {
            Axis::Categorias => vocabulary::<category::Entity, _>(db).await?,
            Axis::Etiquetas => vocabulary::<label::Entity, _>(db).await?,
            Axis::Ingredientes => vocabulary::<ingredient::Entity, _>(db).await?,
        };
        Ok(tags)
    }

    pub async fn create_vocabulary_tag(db: &DatabaseConnection, axis: Axis, name: String) -> CatalogResult<TagRef> {
        let name = name.trim().to_string();

        let existing = match axis {
            Axis::Categorias => find_tag_by_name::<category::Entity, _>(db, &name).await?,
            Axis::Etiquetas => find_tag_by_name::<label::Entity, _>(db, &name).await?,
            Axis::Ingredientes => find_tag_by_name::<ingredient::Entity, _>(db, &name).await?,
        };
        if existing.is_some() {
            return Err(CatalogError::Conflict(format!("'{name}' ya existe en {axis}")));
        }

        let tag = match axis {
            Axis::Categorias => insert_tag::<category::Entity, _>(db, name).await?,
            Axis::Etiquetas => insert_tag::<label::Entity, _>(db, name).await?,
            Axis::Ingredientes => insert_tag::<ingredient::Entity, _>(db, name).await?,
        };
        Ok(tag)
    }
}

async fn ensure_dish_exists<C: ConnectionTrait>(db: &C, dish_id: i64) -> CatalogResult<()> {
    dish::Entity::find_by_id(dish_id)
        .one(db)
        .await?
        .map(|_| ())
        .ok_or(CatalogError::NotFound("Platillo"))
}

async fn link<L, C>(db: &C, dish_id: i64, tag_id: i64) -> CatalogResult<TagRef>
where
    L: TagLink,
    C: ConnectionTrait,
{
    let tag = L::Tag::find()
        .filter(<L::Tag as TagEntity>::ID.eq(tag_id))
        .one(db)
        .await?
        .map(<L::Tag as TagEntity>::to_tag)
        .ok_or(CatalogError::NotFound("Etiqueta"))?;

    let already_linked = L::find()
        .filter(L::DISH_ID.eq(dish_id))
        .filter(L::TAG_ID.eq(tag_id))
        .one(db)
        .await?
        .is_some();
    if already_linked {
        return Err(CatalogError::Conflict(format!(
            "'{}' ya está asignado al platillo {dish_id}",
            tag.name
        )));
    }

    let mut row = <L::ActiveModel as ActiveModelTrait>::default();
    row.set(L::DISH_ID, dish_id.into());
    row.set(L::TAG_ID, tag_id.into());
    L::insert(row).exec(db).await?;

    Ok(tag)
}

async fn unlink<L, C>(db: &C, dish_id: i64, tag_id: i64) -> Result<u64, DbErr>
where
    L: TagLink,
    C: ConnectionTrait,
{
    let result = L::delete_many()
        .filter(L::DISH_ID.eq(dish_id))
        .filter(L::TAG_ID.eq(tag_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

async fn vocabulary<T, C>(db: &C) -> Result<Vec<TagRef>, DbErr>
where
    T: TagEntity,
    C: ConnectionTrait,
{
    let rows = T::find().order_by_asc(T::NAME).all(db).await?;
    Ok(rows.into_iter().map(T::to_tag).collect())
}

async fn find_tag_by_name<T, C>(db: &C, name: &str) -> Result<Option<TagRef>, DbErr>
where
    T: TagEntity,
    C: ConnectionTrait,
{
    Ok(T::find().filter(T::NAME.eq(name)).one(db).await?.map(T::to_tag))
}

async fn insert_tag<T, C>(db: &C, name: String) -> Result<TagRef, DbErr>
where
    T: TagEntity,
    T::Model: IntoActiveModel<T::ActiveModel>,
    C: ConnectionTrait,
{
    let mut row = <T::ActiveModel as ActiveModelTrait>::default();
    row.set(T::NAME, name.into());
    let saved = T::insert(row).exec_with_returning(db).await?;
    Ok(T::to_tag(saved))
}
