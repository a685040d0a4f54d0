//! Migration: Create day_offs table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DayOffs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DayOffs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DayOffs::BarberId).string().not_null())
                    .col(ColumnDef::new(DayOffs::Date).date().not_null())
                    .to_owned(),
            )
            .await?;

        // One day-off per barber per date; concurrent range requests lose
        // the race on this index instead of inserting duplicates.
        manager
            .create_index(
                Index::create()
                    .name("uq_day_offs_barber_date")
                    .table(DayOffs::Table)
                    .col(DayOffs::BarberId)
                    .col(DayOffs::Date)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DayOffs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum DayOffs {
    Table,
    Id,
    BarberId,
    Date,
}
