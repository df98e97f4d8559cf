//! Stay DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::services::{CheckInOutcome, CheckOutOutcome, CheckOutSummary};
use crate::domain::stay::Stay;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StayDto {
    pub id: i32,
    pub guest_id: i32,
    pub room_id: i32,
    pub reservation_id: Option<i32>,
    pub checkin_at: DateTime<Utc>,
    pub expected_checkout_date: NaiveDate,
    pub actual_checkout_at: Option<DateTime<Utc>>,
    pub status: String,
    pub guest_status: String,
    pub nightly_price: Decimal,
    pub nights: i32,
    pub subtotal: Decimal,
    pub tax_rate: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
    pub adults: i32,
    pub children: i32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Stay> for StayDto {
    fn from(s: Stay) -> Self {
        Self {
            id: s.id,
            guest_id: s.guest_id,
            room_id: s.room_id,
            reservation_id: s.reservation_id,
            checkin_at: s.checkin_at,
            expected_checkout_date: s.expected_checkout_date,
            actual_checkout_at: s.actual_checkout_at,
            status: s.status.to_string(),
            guest_status: s.guest_status.to_string(),
            nightly_price: s.nightly_price,
            nights: s.nights,
            subtotal: s.subtotal,
            tax_rate: s.tax_rate,
            tax_amount: s.tax_amount,
            total: s.total,
            adults: s.adults,
            children: s.children,
            notes: s.notes,
            created_at: s.created_at,
        }
    }
}

/// Stay with the guest and room context the front desk shows alongside it.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StayDetailDto {
    pub stay: StayDto,
    pub guest_name: String,
    pub room_number: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CheckInRequest {
    /// Identity document kind: "dni", "passport", "ce"
    #[validate(length(min = 1, max = 20))]
    pub document_type: String,
    #[validate(length(min = 1, max = 30))]
    pub document_number: String,
    #[validate(length(min = 1, max = 100))]
    pub guest_name: String,
    pub guest_surname: Option<String>,
    pub guest_phone: Option<String>,
    #[validate(email)]
    pub guest_email: Option<String>,
    pub guest_nationality: Option<String>,
    pub room_id: i32,
    /// Reservation being consumed, when the guest booked ahead
    pub reservation_id: Option<i32>,
    pub expected_checkout_date: NaiveDate,
    pub nightly_price: Decimal,
    /// Nights to bill up front. Default 1
    pub nights: Option<i32>,
    #[validate(range(min = 1, max = 20))]
    pub adults: i32,
    #[serde(default)]
    #[validate(range(min = 0, max = 20))]
    pub children: i32,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CheckOutRequest {
    pub notes: Option<String>,
    /// Minibar, damages, late fees. Default 0
    #[serde(default)]
    pub additional_charges: Decimal,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateGuestStatusRequest {
    /// One of: inside, outside
    #[validate(length(min = 1))]
    pub guest_status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckInResponse {
    pub stay: StayDto,
    pub guest_id: i32,
    pub room_number: String,
    pub message: String,
}

impl From<CheckInOutcome> for CheckInResponse {
    fn from(o: CheckInOutcome) -> Self {
        Self {
            guest_id: o.guest.id,
            room_number: o.room.number,
            message: o.message,
            stay: o.stay.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckOutSummaryDto {
    pub room_number: String,
    pub guest_name: String,
    pub actual_nights: i32,
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub additional_charges: Decimal,
    pub total: Decimal,
    pub paid: Decimal,
    pub balance_due: Decimal,
}

impl From<CheckOutSummary> for CheckOutSummaryDto {
    fn from(s: CheckOutSummary) -> Self {
        Self {
            room_number: s.room_number,
            guest_name: s.guest_name,
            actual_nights: s.actual_nights,
            subtotal: s.subtotal,
            tax_amount: s.tax_amount,
            additional_charges: s.additional_charges,
            total: s.total,
            paid: s.paid,
            balance_due: s.balance_due,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckOutResponse {
    pub stay: StayDto,
    pub summary: CheckOutSummaryDto,
    pub cleaning_order_created: bool,
}

impl From<CheckOutOutcome> for CheckOutResponse {
    fn from(o: CheckOutOutcome) -> Self {
        Self {
            stay: o.stay.into(),
            summary: o.summary.into(),
            cleaning_order_created: o.cleaning_order_created,
        }
    }
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListStaysQuery {
    /// Only stays that have not checked out yet
    #[serde(default)]
    pub active: bool,
}
