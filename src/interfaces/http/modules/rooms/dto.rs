//! Room DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::room::Room;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RoomDto {
    pub id: i32,
    pub number: String,
    pub room_type: String,
    pub capacity: i32,
    pub floor: i32,
    pub status: String,
    pub base_price: Decimal,
    pub notes: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Room> for RoomDto {
    fn from(r: Room) -> Self {
        Self {
            id: r.id,
            number: r.number,
            room_type: r.room_type.to_string(),
            capacity: r.capacity,
            floor: r.floor,
            status: r.status.to_string(),
            base_price: r.base_price,
            notes: r.notes,
            active: r.active,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRoomRequest {
    #[validate(length(min = 1, max = 10, message = "room number is required"))]
    pub number: String,
    /// One of: simple, double, matrimonial, suite
    pub room_type: String,
    #[validate(range(min = 1, max = 10))]
    pub capacity: i32,
    pub floor: i32,
    pub base_price: Decimal,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRoomRequest {
    pub room_type: Option<String>,
    #[validate(range(min = 1, max = 10))]
    pub capacity: Option<i32>,
    pub floor: Option<i32>,
    pub base_price: Option<Decimal>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRoomStatusRequest {
    /// One of: available, occupied, cleaning, maintenance
    #[validate(length(min = 1))]
    pub status: String,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListRoomsQuery {
    /// Include soft-deleted rooms
    #[serde(default)]
    pub include_inactive: bool,
    /// Filter by status
    pub status: Option<String>,
}
