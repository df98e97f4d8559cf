//! Payment ledger: append-only records of money received against stays

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;

use crate::domain::payment::{paid_sum, Payment, PaymentStatus};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

/// Input for recording a payment
#[derive(Debug, Clone)]
pub struct RecordPayment {
    pub stay_id: i32,
    pub amount: Decimal,
    pub method: String,
    pub concept: Option<String>,
    pub reference: Option<String>,
}

/// Running balance for a stay
#[derive(Debug, Clone)]
pub struct StayBalance {
    pub stay_total: Decimal,
    pub paid: Decimal,
    /// Amount still owed, clamped at zero for display. An overpaid stay
    /// shows zero pending; the ledger itself keeps the full history.
    pub pending: Decimal,
}

/// Result of recording a payment
#[derive(Debug, Clone)]
pub struct PaymentOutcome {
    pub payment: Payment,
    pub balance: StayBalance,
}

pub struct PaymentLedger {
    repos: Arc<dyn RepositoryProvider>,
}

impl PaymentLedger {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn record_payment(&self, input: RecordPayment) -> DomainResult<PaymentOutcome> {
        if input.amount <= Decimal::ZERO {
            return Err(DomainError::Validation(
                "amount must be greater than zero".to_string(),
            ));
        }
        if input.method.trim().is_empty() {
            return Err(DomainError::Validation("method is required".to_string()));
        }

        let stay = self
            .repos
            .stays()
            .find_by_id(input.stay_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Stay", "id", input.stay_id))?;

        let payment = Payment {
            id: 0,
            stay_id: stay.id,
            amount: input.amount,
            method: input.method,
            concept: input.concept,
            reference: input.reference,
            status: PaymentStatus::Paid,
            recorded_at: Utc::now(),
        };
        let payment = self.repos.payments().insert(payment).await?;

        let balance = self.balance_for_stay(stay.id).await?;
        info!(payment_id = payment.id, stay_id = stay.id, amount = %payment.amount,
            pending = %balance.pending, "Payment recorded");

        Ok(PaymentOutcome { payment, balance })
    }

    /// Void a payment. The row survives with `voided` status and stops
    /// counting toward the paid sum; no reversal accounting beyond that.
    pub async fn void_payment(&self, payment_id: i32) -> DomainResult<Payment> {
        let mut payment = self
            .repos
            .payments()
            .find_by_id(payment_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Payment", "id", payment_id))?;

        if payment.status == PaymentStatus::Voided {
            return Err(DomainError::Conflict(format!(
                "Payment {} is already voided",
                payment_id
            )));
        }

        self.repos
            .payments()
            .set_status(payment_id, PaymentStatus::Voided)
            .await?;
        payment.status = PaymentStatus::Voided;

        info!(payment_id, stay_id = payment.stay_id, "Payment voided");
        Ok(payment)
    }

    pub async fn payments_for_stay(&self, stay_id: i32) -> DomainResult<Vec<Payment>> {
        // 404 on an unknown stay rather than an empty ledger
        self.repos
            .stays()
            .find_by_id(stay_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Stay", "id", stay_id))?;
        self.repos.payments().find_for_stay(stay_id).await
    }

    pub async fn balance_for_stay(&self, stay_id: i32) -> DomainResult<StayBalance> {
        let stay = self
            .repos
            .stays()
            .find_by_id(stay_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Stay", "id", stay_id))?;
        let payments = self.repos.payments().find_for_stay(stay_id).await?;
        let paid = paid_sum(&payments);
        Ok(StayBalance {
            stay_total: stay.total,
            paid,
            pending: (stay.total - paid).max(Decimal::ZERO),
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    use crate::application::services::stay_lifecycle::{
        CheckInInput, CheckOutInput, StayLifecycle,
    };
    use crate::domain::room::{Room, RoomStatus, RoomType};
    use crate::infrastructure::storage::InMemoryRepositoryProvider;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    /// Check in and immediately check out one day later: total 104.40
    /// (80 + 14.40 tax + 10 extras).
    async fn checked_out_stay() -> (PaymentLedger, Arc<InMemoryRepositoryProvider>, i32) {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let room = repos
            .rooms()
            .insert(Room {
                id: 0,
                number: "101".into(),
                room_type: RoomType::Double,
                capacity: 2,
                floor: 1,
                status: RoomStatus::Available,
                base_price: dec("80"),
                notes: None,
                active: true,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
            .await
            .unwrap();

        let lifecycle = StayLifecycle::new(repos.clone());
        let checkin_time = Utc::now();
        let outcome = lifecycle
            .check_in_at(
                CheckInInput {
                    document_type: "dni".into(),
                    document_number: "12345678".into(),
                    guest_name: "Ana".into(),
                    guest_surname: Some("Pérez".into()),
                    guest_phone: None,
                    guest_email: None,
                    guest_nationality: None,
                    room_id: room.id,
                    reservation_id: None,
                    expected_checkout_date: checkin_time.date_naive() + Duration::days(1),
                    nightly_price: dec("80"),
                    nights: Some(1),
                    adults: 1,
                    children: 0,
                    notes: None,
                },
                checkin_time,
            )
            .await
            .unwrap();
        lifecycle
            .check_out_at(
                outcome.stay.id,
                CheckOutInput {
                    notes: None,
                    additional_charges: dec("10"),
                },
                checkin_time + Duration::days(1),
            )
            .await
            .unwrap();

        (PaymentLedger::new(repos.clone()), repos, outcome.stay.id)
    }

    #[tokio::test]
    async fn recording_and_voiding_roundtrip() {
        // Scenario: 50 against a 104.40 stay leaves 54.40; voiding restores it.
        let (ledger, _repos, stay_id) = checked_out_stay().await;

        let outcome = ledger
            .record_payment(RecordPayment {
                stay_id,
                amount: dec("50"),
                method: "cash".into(),
                concept: None,
                reference: None,
            })
            .await
            .unwrap();
        assert_eq!(outcome.balance.stay_total, dec("104.40"));
        assert_eq!(outcome.balance.pending, dec("54.40"));

        ledger.void_payment(outcome.payment.id).await.unwrap();
        let balance = ledger.balance_for_stay(stay_id).await.unwrap();
        assert_eq!(balance.paid, Decimal::ZERO);
        assert_eq!(balance.pending, dec("104.40"));
    }

    #[tokio::test]
    async fn overpayment_clamps_pending_at_zero() {
        let (ledger, _repos, stay_id) = checked_out_stay().await;
        let outcome = ledger
            .record_payment(RecordPayment {
                stay_id,
                amount: dec("200"),
                method: "card".into(),
                concept: None,
                reference: Some("OP-991".into()),
            })
            .await
            .unwrap();
        assert_eq!(outcome.balance.pending, Decimal::ZERO);
        assert_eq!(outcome.balance.paid, dec("200"));
    }

    #[tokio::test]
    async fn double_void_conflicts() {
        let (ledger, _repos, stay_id) = checked_out_stay().await;
        let outcome = ledger
            .record_payment(RecordPayment {
                stay_id,
                amount: dec("30"),
                method: "cash".into(),
                concept: None,
                reference: None,
            })
            .await
            .unwrap();

        ledger.void_payment(outcome.payment.id).await.unwrap();
        let err = ledger.void_payment(outcome.payment.id).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn zero_amount_is_rejected() {
        let (ledger, _repos, stay_id) = checked_out_stay().await;
        let err = ledger
            .record_payment(RecordPayment {
                stay_id,
                amount: Decimal::ZERO,
                method: "cash".into(),
                concept: None,
                reference: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn unknown_stay_is_not_found() {
        let (ledger, _repos, _stay_id) = checked_out_stay().await;
        let err = ledger
            .record_payment(RecordPayment {
                stay_id: 999,
                amount: dec("10"),
                method: "cash".into(),
                concept: None,
                reference: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
