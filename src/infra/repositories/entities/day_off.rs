//! Day-off database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::DayOff;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "day_offs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub barber_id: String,
    pub date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for DayOff {
    fn from(model: Model) -> Self {
        DayOff {
            id: model.id,
            barber_id: model.barber_id,
            date: model.date,
        }
    }
}
