//! Reservation DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::reservation::Reservation;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    pub room_id: i32,
    pub guest_id: Option<i32>,
    pub client_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub nightly_price: Decimal,
    pub nights: i32,
    pub estimated_total: Decimal,
    pub advance_payment: Decimal,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationDto {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            room_id: r.room_id,
            guest_id: r.guest_id,
            client_name: r.client_name,
            start_date: r.start_date,
            end_date: r.end_date,
            status: r.status.to_string(),
            nightly_price: r.nightly_price,
            nights: r.nights,
            estimated_total: r.estimated_total,
            advance_payment: r.advance_payment,
            notes: r.notes,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReservationRequest {
    pub room_id: i32,
    pub guest_id: Option<i32>,
    #[validate(length(min = 1, max = 150))]
    pub client_name: String,
    /// First night, inclusive
    pub start_date: NaiveDate,
    /// Departure date, exclusive
    pub end_date: NaiveDate,
    /// Overrides the room's base price when present
    pub nightly_price: Option<Decimal>,
    #[serde(default)]
    pub advance_payment: Decimal,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListReservationsQuery {
    /// Filter by status: pending, confirmed, checkin, cancelled, no_show
    pub status: Option<String>,
    /// Keep reservations whose stay window touches this date or later
    pub from: Option<NaiveDate>,
    /// Keep reservations whose stay window starts before this date
    pub to: Option<NaiveDate>,
}
