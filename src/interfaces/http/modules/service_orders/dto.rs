//! Service order DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::service_order::ServiceOrder;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceOrderDto {
    pub id: i32,
    pub room_id: Option<i32>,
    pub service_type: String,
    pub status: String,
    pub priority: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub resolved_by: Option<String>,
}

impl From<ServiceOrder> for ServiceOrderDto {
    fn from(o: ServiceOrder) -> Self {
        Self {
            id: o.id,
            room_id: o.room_id,
            service_type: o.service_type.to_string(),
            status: o.status.to_string(),
            priority: o.priority.to_string(),
            notes: o.notes,
            created_at: o.created_at,
            completed_at: o.completed_at,
            resolved_by: o.resolved_by,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateServiceOrderRequest {
    pub room_id: Option<i32>,
    /// "cleaning" or "maintenance"
    #[validate(length(min = 1))]
    pub service_type: String,
    /// "low", "normal" or "high". Default normal
    pub priority: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CompleteServiceOrderRequest {
    /// Who did the work
    #[validate(length(min = 1, max = 100))]
    pub resolved_by: String,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListServiceOrdersQuery {
    /// Filter by status: pending, completed, cancelled
    pub status: Option<String>,
}
