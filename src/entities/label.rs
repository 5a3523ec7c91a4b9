use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{TagEntity, TagRef};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "etiquetas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::dish_label::Entity")]
    DishLabel,
}

impl Related<super::dish_label::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DishLabel.def()
    }
}

impl Related<super::dish::Entity> for Entity {
    fn to() -> RelationDef {
        super::dish_label::Relation::Dish.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::dish_label::Relation::Label.def().rev())
    }
}

impl TagEntity for Entity {
    const ID: Column = Column::Id;
    const NAME: Column = Column::Name;

    fn to_tag(model: Model) -> TagRef {
        TagRef { id: model.id, name: model.name }
    }
}

impl ActiveModelBehavior for ActiveModel {}
