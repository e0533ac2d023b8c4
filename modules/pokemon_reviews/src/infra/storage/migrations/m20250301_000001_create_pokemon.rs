use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pokemon::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pokemon::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Pokemon::Name).string().not_null())
                    .col(ColumnDef::new(Pokemon::NameKey).string().not_null())
                    .col(ColumnDef::new(Pokemon::BirthDate).date().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pokemon_name_key")
                    .table(Pokemon::Table)
                    .col(Pokemon::NameKey)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Categories::Name).string().not_null())
                    .col(
                        ColumnDef::new(Categories::NameKey)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PokemonCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PokemonCategories::PokemonId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PokemonCategories::CategoryId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(PokemonCategories::PokemonId)
                            .col(PokemonCategories::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pokemon_categories_pokemon")
                            .from(PokemonCategories::Table, PokemonCategories::PokemonId)
                            .to(Pokemon::Table, Pokemon::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pokemon_categories_category")
                            .from(PokemonCategories::Table, PokemonCategories::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PokemonCategories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Pokemon::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Pokemon {
    Table,
    Id,
    Name,
    NameKey,
    BirthDate,
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
    Name,
    NameKey,
}

#[derive(DeriveIden)]
enum PokemonCategories {
    Table,
    PokemonId,
    CategoryId,
}
