//! Booking database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Booking;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub barber: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub message: Option<String>,
    pub price: f64,
    pub timestamp: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Booking {
    fn from(model: Model) -> Self {
        Booking {
            id: model.id,
            barber: model.barber,
            service: model.service,
            date: model.date,
            time: model.time,
            name: model.name,
            surname: model.surname,
            email: model.email,
            phone: model.phone,
            message: model.message,
            price: model.price,
            timestamp: model.timestamp,
        }
    }
}
