//! Reservation entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub room_id: i32,

    #[sea_orm(nullable)]
    pub guest_id: Option<i32>,

    pub client_name: String,

    /// First night, inclusive
    pub start_date: Date,
    /// Departure date, exclusive
    pub end_date: Date,

    /// Reservation status: pending, confirmed, checkin, cancelled, no_show
    pub status: String,

    pub nightly_price: Decimal,
    pub nights: i32,
    pub estimated_total: Decimal,
    pub advance_payment: Decimal,

    #[sea_orm(nullable)]
    pub notes: Option<String>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::Id"
    )]
    Room,
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
