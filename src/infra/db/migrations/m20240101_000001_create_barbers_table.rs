//! Migration: Create barbers table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Barbers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Barbers::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Barbers::Name).string().not_null())
                    .col(ColumnDef::new(Barbers::RoleKey).string().not_null().default(""))
                    // Images may be inlined as base64 data URIs
                    .col(ColumnDef::new(Barbers::Img).text().not_null().default(""))
                    .col(ColumnDef::new(Barbers::DescriptionIt).text().null())
                    .col(ColumnDef::new(Barbers::DescriptionEn).text().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Barbers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Barbers {
    Table,
    Id,
    Name,
    RoleKey,
    Img,
    DescriptionIt,
    DescriptionEn,
}
