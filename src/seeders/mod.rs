pub mod vocabulary_seeder;

use sea_orm::DatabaseConnection;

use crate::error::CatalogResult;

pub async fn run_seeders(db: &DatabaseConnection) -> CatalogResult<()> {
    vocabulary_seeder::seed_vocabularies(db).await?;

    Ok(())
}
