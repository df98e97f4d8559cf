//! Room entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub number: String,

    /// Room type: simple, double, matrimonial, suite
    pub room_type: String,

    pub capacity: i32,
    pub floor: i32,

    /// Room status: available, occupied, cleaning, maintenance
    pub status: String,

    pub base_price: Decimal,

    #[sea_orm(nullable)]
    pub notes: Option<String>,

    /// Soft-delete flag
    pub active: bool,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::stay::Entity")]
    Stays,
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservations,
}

impl Related<super::stay::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stays.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
