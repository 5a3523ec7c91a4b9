pub mod category;
pub mod dish;
pub mod dish_category;
pub mod dish_ingredient;
pub mod dish_label;
pub mod ingredient;
pub mod label;
pub mod local;

use std::fmt;
use std::str::FromStr;

use sea_orm::EntityTrait;
use serde::Serialize;

/// One of the three independent tag classifications a dish can carry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Categorias,
    Etiquetas,
    Ingredientes,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Categorias, Axis::Etiquetas, Axis::Ingredientes];

    /// Path segment and JSON key used for this axis.
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Categorias => "categorias",
            Axis::Etiquetas => "etiquetas",
            Axis::Ingredientes => "ingredientes",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Axis::ALL.into_iter().find(|axis| axis.as_str() == s).ok_or(())
    }
}

/// A resolved tag, independent of which vocabulary it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TagRef {
    pub id: i64,
    pub name: String,
}

/// A tag vocabulary table (`categorias`, `etiquetas`, `ingredientes`).
pub trait TagEntity: EntityTrait {
    const ID: Self::Column;
    const NAME: Self::Column;

    fn to_tag(model: Self::Model) -> TagRef;
}

/// A junction table linking dishes to one tag vocabulary.
pub trait TagLink: EntityTrait {
    type Tag: TagEntity;

    const ID: Self::Column;
    const DISH_ID: Self::Column;
    const TAG_ID: Self::Column;

    fn dish_id(model: &Self::Model) -> i64;
}
