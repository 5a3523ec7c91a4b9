use sea_orm::DatabaseConnection;

use crate::entities::Axis;
use crate::error::{CatalogError, CatalogResult};
use crate::services::tagging_service::TaggingService;

fn starter_vocabulary(axis: Axis) -> &'static [&'static str] {
    match axis {
        Axis::Categorias => &["Tacos", "Tortas", "Postres", "Bebidas", "Mariscos"],
        Axis::Etiquetas => &["Picante", "Vegetariano", "Vegano", "Sin gluten", "Dulce"],
        Axis::Ingredientes => &["Cerdo", "Res", "Pollo", "Queso", "Aguacate", "Chile", "Piña"],
    }
}

/// Inserts the starter tags that are not there yet; safe to run on every boot.
pub async fn seed_vocabularies(db: &DatabaseConnection) -> CatalogResult<()> {
    for axis in Axis::ALL {
        for name in starter_vocabulary(axis) {
            match TaggingService::create_vocabulary_tag(db, axis, name.to_string()).await {
                Ok(tag) => tracing::info!(%axis, name = %tag.name, "seeded tag"),
                Err(CatalogError::Conflict(_)) => {}
                Err(e) => return Err(e),
            }
        }
    }

    Ok(())
}
