//! Payment entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub stay_id: i32,

    pub amount: Decimal,

    /// Payment method: cash, card, transfer, yape, plin...
    pub method: String,

    #[sea_orm(nullable)]
    pub concept: Option<String>,

    #[sea_orm(nullable)]
    pub reference: Option<String>,

    /// Payment status: paid, pending, voided
    pub status: String,

    pub recorded_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::stay::Entity",
        from = "Column::StayId",
        to = "super::stay::Column::Id"
    )]
    Stay,
}

impl Related<super::stay::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stay.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
