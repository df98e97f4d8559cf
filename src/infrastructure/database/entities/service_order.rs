//! Service order entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(nullable)]
    pub room_id: Option<i32>,

    /// Service type: cleaning, cleaning_after_checkout, maintenance
    pub service_type: String,

    /// Order status: pending, completed, cancelled
    pub status: String,

    /// Priority: low, normal, high
    pub priority: String,

    #[sea_orm(nullable)]
    pub notes: Option<String>,

    pub created_at: DateTimeUtc,

    #[sea_orm(nullable)]
    pub completed_at: Option<DateTimeUtc>,

    #[sea_orm(nullable)]
    pub resolved_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
