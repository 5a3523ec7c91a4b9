use sea_orm::entity::prelude::*;

use super::TagLink;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categorias_por_platillo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "platillo_id")]
    pub dish_id: i64,
    #[sea_orm(column_name = "categoria_id")]
    pub category_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dish::Entity",
        from = "Column::DishId",
        to = "super::dish::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Dish,
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Category,
}

impl Related<super::dish::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dish.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl TagLink for Entity {
    type Tag = super::category::Entity;

    const ID: Column = Column::Id;
    const DISH_ID: Column = Column::DishId;
    const TAG_ID: Column = Column::CategoryId;

    fn dish_id(model: &Model) -> i64 {
        model.dish_id
    }
}

impl ActiveModelBehavior for ActiveModel {}
