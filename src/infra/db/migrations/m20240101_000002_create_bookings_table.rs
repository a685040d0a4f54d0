//! Migration: Create bookings table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bookings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bookings::Barber).string().not_null())
                    .col(ColumnDef::new(Bookings::Service).string().not_null())
                    .col(ColumnDef::new(Bookings::Date).string().not_null())
                    .col(ColumnDef::new(Bookings::Time).string().not_null())
                    .col(ColumnDef::new(Bookings::Name).string().not_null())
                    .col(ColumnDef::new(Bookings::Surname).string().not_null())
                    .col(ColumnDef::new(Bookings::Email).string().not_null())
                    .col(ColumnDef::new(Bookings::Phone).string().not_null())
                    .col(ColumnDef::new(Bookings::Message).text().null())
                    .col(ColumnDef::new(Bookings::Price).double().not_null().default(0.0))
                    .col(
                        ColumnDef::new(Bookings::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Reserved-slot lookups filter on both columns. Double booking is allowed.
        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_date_barber")
                    .table(Bookings::Table)
                    .col(Bookings::Date)
                    .col(Bookings::Barber)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Bookings {
    Table,
    Id,
    Barber,
    Service,
    Date,
    Time,
    Name,
    Surname,
    Email,
    Phone,
    Message,
    Price,
    Timestamp,
}
