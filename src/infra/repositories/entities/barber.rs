//! Barber database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Barber;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "barbers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub role_key: String,
    /// Image URL or base64 payload
    #[sea_orm(column_type = "Text")]
    pub img: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_it: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_en: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Barber {
    fn from(model: Model) -> Self {
        Barber {
            id: model.id,
            name: model.name,
            role_key: model.role_key,
            img: model.img,
            description_it: model.description_it,
            description_en: model.description_en,
        }
    }
}
