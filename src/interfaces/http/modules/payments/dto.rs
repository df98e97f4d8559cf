//! Payment DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::services::{PaymentOutcome, StayBalance};
use crate::domain::payment::Payment;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentDto {
    pub id: i32,
    pub stay_id: i32,
    pub amount: Decimal,
    pub method: String,
    pub concept: Option<String>,
    pub reference: Option<String>,
    pub status: String,
    pub recorded_at: DateTime<Utc>,
}

impl From<Payment> for PaymentDto {
    fn from(p: Payment) -> Self {
        Self {
            id: p.id,
            stay_id: p.stay_id,
            amount: p.amount,
            method: p.method,
            concept: p.concept,
            reference: p.reference,
            status: p.status.to_string(),
            recorded_at: p.recorded_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RecordPaymentRequest {
    pub stay_id: i32,
    pub amount: Decimal,
    /// "cash", "card", "yape", "plin", "transfer", ...
    #[validate(length(min = 1, max = 30))]
    pub method: String,
    pub concept: Option<String>,
    /// External voucher or transaction reference
    pub reference: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StayBalanceDto {
    pub stay_total: Decimal,
    pub paid: Decimal,
    /// Amount still owed, clamped at zero
    pub pending: Decimal,
}

impl From<StayBalance> for StayBalanceDto {
    fn from(b: StayBalance) -> Self {
        Self {
            stay_total: b.stay_total,
            paid: b.paid,
            pending: b.pending,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentOutcomeDto {
    pub payment: PaymentDto,
    pub balance: StayBalanceDto,
}

impl From<PaymentOutcome> for PaymentOutcomeDto {
    fn from(o: PaymentOutcome) -> Self {
        Self {
            payment: o.payment.into(),
            balance: o.balance.into(),
        }
    }
}
