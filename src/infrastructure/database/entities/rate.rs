//! Rate card entity (one row per room type)

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub room_type: String,

    pub base_price: Decimal,

    #[sea_orm(nullable)]
    pub weekend_price: Option<Decimal>,

    #[sea_orm(nullable)]
    pub low_price: Option<Decimal>,

    #[sea_orm(nullable)]
    pub mid_price: Option<Decimal>,

    #[sea_orm(nullable)]
    pub high_price: Option<Decimal>,

    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
