use sea_orm_migration::prelude::*;

use crate::m20250301_090000_create_investors_table::Investors;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Commitments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Commitments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Commitments::InvestorId).integer().not_null())
                    .col(ColumnDef::new(Commitments::AssetClass).string().not_null())
                    .col(ColumnDef::new(Commitments::Amount).double().not_null()) // f64 on the entity
                    .col(ColumnDef::new(Commitments::Currency).string_len(3).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_commitments_investor_id")
                            .from(Commitments::Table, Commitments::InvestorId)
                            .to(Investors::Table, Investors::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Commitments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Commitments {
    Table,
    Id,
    InvestorId,
    AssetClass,
    Amount,
    Currency,
}
