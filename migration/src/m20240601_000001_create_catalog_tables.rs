use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. Locales (owned by the user subsystem, read-only here)
        manager
            .create_table(
                Table::create()
                    .table(Locales::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Locales::Id).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Locales::Name).string().not_null())
                    .col(ColumnDef::new(Locales::PhotoUrl).string().null())
                    .to_owned(),
            )
            .await?;

        // 2. Platillos
        manager
            .create_table(
                Table::create()
                    .table(Platillos::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Platillos::Id).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Platillos::Name).string().not_null())
                    .col(ColumnDef::new(Platillos::Description).text().not_null())
                    .col(ColumnDef::new(Platillos::PhotoUrl).string().not_null())
                    .col(ColumnDef::new(Platillos::Price).decimal_len(10, 2).not_null())
                    .col(ColumnDef::new(Platillos::LocalId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_platillos_local_id")
                            .from(Platillos::Table, Platillos::LocalId)
                            .to(Locales::Table, Locales::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 3. Tag vocabularies, one table per axis
        for table in [Vocabulary::Categorias, Vocabulary::Etiquetas, Vocabulary::Ingredientes] {
            manager
                .create_table(
                    Table::create()
                        .table(table)
                        .if_not_exists()
                        .col(ColumnDef::new(Vocabulary::Id).big_integer().not_null().auto_increment().primary_key())
                        .col(ColumnDef::new(Vocabulary::Name).string().not_null().unique_key())
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [Vocabulary::Ingredientes, Vocabulary::Etiquetas, Vocabulary::Categorias] {
            manager.drop_table(Table::drop().table(table).to_owned()).await?;
        }
        manager.drop_table(Table::drop().table(Platillos::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Locales::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(Iden)]
pub(crate) enum Locales {
    Table,
    Id,
    Name,
    PhotoUrl,
}

#[derive(Iden)]
pub(crate) enum Platillos {
    Table,
    Id,
    Name,
    Description,
    PhotoUrl,
    Price,
    LocalId,
}

// The three vocabularies share one column layout.
#[derive(Iden, Clone, Copy)]
pub(crate) enum Vocabulary {
    Categorias,
    Etiquetas,
    Ingredientes,
    Id,
    Name,
}
