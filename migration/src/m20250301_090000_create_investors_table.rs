use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Investors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Investors::Id)
                            .integer() // Corresponds to i32
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Investors::Name).string().not_null())
                    .col(ColumnDef::new(Investors::InvestorType).string().not_null())
                    .col(ColumnDef::new(Investors::Country).string().not_null())
                    .col(ColumnDef::new(Investors::DateAdded).date().not_null())
                    .col(ColumnDef::new(Investors::LastUpdated).date().not_null())
                    .to_owned(),
            )
            .await?;

        // The seeder looks investors up by name, so index it (not unique)
        manager
            .create_index(
                Index::create()
                    .name("idx_investors_name")
                    .table(Investors::Table)
                    .col(Investors::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Investors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Investors {
    Table,
    Id,
    Name,
    InvestorType,
    Country,
    DateAdded,
    LastUpdated,
}
