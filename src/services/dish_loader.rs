//! Loads dishes together with their local and tag axes.
//!
//! Every load issues one query for the dishes (joined with their local) and
//! one batched query per requested axis. Junction rows are resolved to their
//! tag in the same statement, so there are no per-dish round trips.

use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Related, Select,
};

use crate::entities::{
    dish, dish_category, dish_ingredient, dish_label, local, Axis, TagEntity, TagLink, TagRef,
};
use crate::error::{CatalogError, CatalogResult};

/// Which relations a load materializes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Include {
    pub categorias: bool,
    pub etiquetas: bool,
    pub ingredientes: bool,
}

impl Include {
    /// Dish and local only; enough for list and search views.
    pub const LOCAL: Include = Include { categorias: false, etiquetas: false, ingredientes: false };
    /// Dish, local and all three tag axes.
    pub const ALL: Include = Include { categorias: true, etiquetas: true, ingredientes: true };

    pub fn includes(&self, axis: Axis) -> bool {
        match axis {
            Axis::Categorias => self.categorias,
            Axis::Etiquetas => self.etiquetas,
            Axis::Ingredientes => self.ingredientes,
        }
    }
}

/// A dish with its relations. Axes left out of the [`Include`] are `None`,
/// which is distinct from an axis that was loaded and turned out empty.
#[derive(Clone, Debug, PartialEq)]
pub struct DishGraph {
    pub dish: dish::Model,
    pub local: Option<local::Model>,
    pub categorias: Option<Vec<TagRef>>,
    pub etiquetas: Option<Vec<TagRef>>,
    pub ingredientes: Option<Vec<TagRef>>,
}

impl DishGraph {
    pub fn axis(&self, axis: Axis) -> Option<&[TagRef]> {
        match axis {
            Axis::Categorias => self.categorias.as_deref(),
            Axis::Etiquetas => self.etiquetas.as_deref(),
            Axis::Ingredientes => self.ingredientes.as_deref(),
        }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut Option<Vec<TagRef>> {
        match axis {
            Axis::Categorias => &mut self.categorias,
            Axis::Etiquetas => &mut self.etiquetas,
            Axis::Ingredientes => &mut self.ingredientes,
        }
    }
}

pub struct DishLoader {
    include: Include,
}

impl DishLoader {
    pub fn new(include: Include) -> Self {
        Self { include }
    }

    /// Runs `query` and attaches the configured relations, preserving the
    /// query's row order.
    pub async fn load<C>(&self, db: &C, query: Select<dish::Entity>) -> Result<Vec<DishGraph>, DbErr>
    where
        C: ConnectionTrait,
    {
        let rows = query.find_also_related(local::Entity).all(db).await?;

        let mut graphs: Vec<DishGraph> = rows
            .into_iter()
            .map(|(dish, local)| DishGraph {
                dish,
                local,
                categorias: None,
                etiquetas: None,
                ingredientes: None,
            })
            .collect();

        if graphs.is_empty() {
            return Ok(graphs);
        }

        let dish_ids: Vec<i64> = graphs.iter().map(|g| g.dish.id).collect();

        for axis in Axis::ALL {
            if !self.include.includes(axis) {
                continue;
            }

            let mut by_dish = load_axis(db, axis, &dish_ids).await?;
            for graph in &mut graphs {
                *graph.axis_mut(axis) = Some(by_dish.remove(&graph.dish.id).unwrap_or_default());
            }
        }

        Ok(graphs)
    }

    pub async fn load_one<C>(&self, db: &C, id: i64) -> CatalogResult<DishGraph>
    where
        C: ConnectionTrait,
    {
        self.load(db, dish::Entity::find_by_id(id))
            .await?
            .pop()
            .ok_or(CatalogError::NotFound("Platillo"))
    }
}

/// Tags on `axis` for each of `dish_ids`, keyed by dish id.
pub async fn load_axis<C>(db: &C, axis: Axis, dish_ids: &[i64]) -> Result<HashMap<i64, Vec<TagRef>>, DbErr>
where
    C: ConnectionTrait,
{
    match axis {
        Axis::Categorias => load_links::<dish_category::Entity, _>(db, dish_ids).await,
        Axis::Etiquetas => load_links::<dish_label::Entity, _>(db, dish_ids).await,
        Axis::Ingredientes => load_links::<dish_ingredient::Entity, _>(db, dish_ids).await,
    }
}

async fn load_links<L, C>(db: &C, dish_ids: &[i64]) -> Result<HashMap<i64, Vec<TagRef>>, DbErr>
where
    L: TagLink + Related<L::Tag>,
    C: ConnectionTrait,
{
    let rows = L::find()
        .filter(L::DISH_ID.is_in(dish_ids.iter().copied()))
        .order_by_asc(L::ID)
        .find_also_related(<L::Tag as Default>::default())
        .all(db)
        .await?;

    let mut by_dish: HashMap<i64, Vec<TagRef>> = HashMap::new();
    for (link, tag) in rows {
        let dish_id = L::dish_id(&link);
        match tag {
            Some(tag) => by_dish.entry(dish_id).or_default().push(<L::Tag as TagEntity>::to_tag(tag)),
            None => tracing::warn!(dish_id, "junction row points at a missing tag"),
        }
    }

    Ok(by_dish)
}
