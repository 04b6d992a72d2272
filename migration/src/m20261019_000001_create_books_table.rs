use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Books::Table)
                    .if_not_exists()
                    .col(pk_auto(Books::Id))
                    .col(text(Books::Title))
                    .col(text(Books::Authors))
                    .col(text(Books::Isbn))
                    .col(text(Books::Imageurl))
                    .col(text(Books::Description))
                    .col(text(Books::Bookshelf).default(""))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Books::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Books {
    Table,
    Id,
    Title,
    Authors,
    Isbn,
    Imageurl,
    Description,
    Bookshelf,
}
