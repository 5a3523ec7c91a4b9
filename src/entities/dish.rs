use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "platillos")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub photo_url: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    pub local_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::local::Entity",
        from = "Column::LocalId",
        to = "super::local::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Local,
    #[sea_orm(has_many = "super::dish_category::Entity")]
    DishCategory,
    #[sea_orm(has_many = "super::dish_label::Entity")]
    DishLabel,
    #[sea_orm(has_many = "super::dish_ingredient::Entity")]
    DishIngredient,
}

impl Related<super::local::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Local.def()
    }
}

impl Related<super::dish_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DishCategory.def()
    }
}

impl Related<super::dish_label::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DishLabel.def()
    }
}

impl Related<super::dish_ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DishIngredient.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
