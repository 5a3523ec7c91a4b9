use sea_orm::entity::prelude::*;

use super::TagLink;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "etiquetas_por_platillo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "platillo_id")]
    pub dish_id: i64,
    #[sea_orm(column_name = "etiqueta_id")]
    pub label_id: i64,
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
        belongs_to = "super::label::Entity",
        from = "Column::LabelId",
        to = "super::label::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Label,
}

impl Related<super::dish::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dish.def()
    }
}

impl Related<super::label::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Label.def()
    }
}

impl TagLink for Entity {
    type Tag = super::label::Entity;

    const ID: Column = Column::Id;
    const DISH_ID: Column = Column::DishId;
    const TAG_ID: Column = Column::LabelId;

    fn dish_id(model: &Model) -> i64 {
        model.dish_id
    }
}

impl ActiveModelBehavior for ActiveModel {}
