use sea_orm_migration::prelude::*;

use crate::m20240601_000001_create_catalog_tables::{Platillos, Vocabulary};

#[derive(DeriveMigrationName)]
pub struct Migration;

// (junction table, tag FK column, vocabulary table)
const LINKS: [(Links, Links, Vocabulary); 3] = [
    (Links::CategoriasPorPlatillo, Links::CategoriaId, Vocabulary::Categorias),
    (Links::EtiquetasPorPlatillo, Links::EtiquetaId, Vocabulary::Etiquetas),
    (Links::IngredientesPorPlatillo, Links::IngredienteId, Vocabulary::Ingredientes),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (table, tag_column, vocabulary) in LINKS {
            let table_name = table.to_string();

            manager
                .create_table(
                    Table::create()
                        .table(table)
                        .if_not_exists()
                        .col(ColumnDef::new(Links::Id).big_integer().not_null().auto_increment().primary_key())
                        .col(ColumnDef::new(Links::PlatilloId).big_integer().not_null())
                        .col(ColumnDef::new(tag_column).big_integer().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name(format!("fk_{table_name}_platillo_id"))
                                .from(table, Links::PlatilloId)
                                .to(Platillos::Table, Platillos::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name(format!("fk_{table_name}_{}", tag_column.to_string()))
                                .from(table, tag_column)
                                .to(vocabulary, Vocabulary::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            // A tag is linked to a dish at most once per axis
            manager
                .create_index(
                    Index::create()
                        .name(format!("idx_{table_name}_unique_pair"))
                        .table(table)
                        .col(Links::PlatilloId)
                        .col(tag_column)
                        .unique()
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (table, _, _) in LINKS {
            manager.drop_table(Table::drop().table(table).to_owned()).await?;
        }
        Ok(())
    }
}

#[derive(Iden, Clone, Copy)]
enum Links {
    CategoriasPorPlatillo,
    EtiquetasPorPlatillo,
    IngredientesPorPlatillo,
    Id,
    PlatilloId,
    CategoriaId,
    EtiquetaId,
    IngredienteId,
}
