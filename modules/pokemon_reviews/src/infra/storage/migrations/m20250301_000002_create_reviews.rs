use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reviewers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reviewers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reviewers::FirstName).string().not_null())
                    .col(ColumnDef::new(Reviewers::LastName).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reviewers_full_name")
                    .table(Reviewers::Table)
                    .col(Reviewers::FirstName)
                    .col(Reviewers::LastName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reviews::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reviews::Title).string().not_null())
                    .col(ColumnDef::new(Reviews::Text).text().not_null())
                    .col(ColumnDef::new(Reviews::Rating).integer().not_null())
                    .col(ColumnDef::new(Reviews::PokemonId).integer().not_null())
                    .col(ColumnDef::new(Reviews::ReviewerId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_pokemon")
                            .from(Reviews::Table, Reviews::PokemonId)
                            .to(Pokemon::Table, Pokemon::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_reviewer")
                            .from(Reviews::Table, Reviews::ReviewerId)
                            .to(Reviewers::Table, Reviewers::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_pokemon_id")
                    .table(Reviews::Table)
                    .col(Reviews::PokemonId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reviewers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Reviewers {
    Table,
    Id,
    FirstName,
    LastName,
}

#[derive(DeriveIden)]
enum Reviews {
    Table,
    Id,
    Title,
    Text,
    Rating,
    PokemonId,
    ReviewerId,
}

#[derive(DeriveIden)]
enum Pokemon {
    Table,
    Id,
}
