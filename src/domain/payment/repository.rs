//! Payment repository interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::model::{Payment, PaymentStatus};
use crate::domain::DomainResult;

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Append a payment to the ledger; the store assigns the id
    async fn insert(&self, payment: Payment) -> DomainResult<Payment>;

    /// Find payment by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Payment>>;

    /// All payments for a stay, oldest first
    async fn find_for_stay(&self, stay_id: i32) -> DomainResult<Vec<Payment>>;

    /// Payments recorded inside `[start, end)`, for revenue reports
    async fn find_recorded_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<Vec<Payment>>;

    /// Flip a payment's status (used for voiding)
    async fn set_status(&self, id: i32, status: PaymentStatus) -> DomainResult<()>;
}
