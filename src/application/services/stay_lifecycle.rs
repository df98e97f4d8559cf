//! Stay lifecycle: the check-in / check-out workflow.
//!
//! The primary state change (the stay row) is strict; secondary bookkeeping
//! (reservation sync, room flag, cleaning order) is best-effort and logged,
//! never aborting the operation.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::application::services::guest_registry::{GuestRegistry, UpsertGuest};
use crate::domain::guest::Guest;
use crate::domain::payment::paid_sum;
use crate::domain::reservation::ReservationStatus;
use crate::domain::room::{Room, RoomStatus};
use crate::domain::service_order::ServiceOrder;
use crate::domain::stay::{compute_totals, elapsed_nights, GuestStatus, Stay, StayStatus};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

/// Everything reception submits at check-in
#[derive(Debug, Clone)]
pub struct CheckInInput {
    pub document_type: String,
    pub document_number: String,
    pub guest_name: String,
    pub guest_surname: Option<String>,
    pub guest_phone: Option<String>,
    pub guest_email: Option<String>,
    pub guest_nationality: Option<String>,
    pub room_id: i32,
    /// Reservation being consumed, when the guest booked ahead
    pub reservation_id: Option<i32>,
    pub expected_checkout_date: NaiveDate,
    pub nightly_price: Decimal,
    pub nights: Option<i32>,
    pub adults: i32,
    pub children: i32,
    pub notes: Option<String>,
}

/// Result of a successful check-in
#[derive(Debug, Clone)]
pub struct CheckInOutcome {
    pub stay: Stay,
    pub guest: Guest,
    pub room: Room,
    pub message: String,
}

/// Optional extras submitted at check-out
#[derive(Debug, Clone, Default)]
pub struct CheckOutInput {
    pub notes: Option<String>,
    pub additional_charges: Decimal,
}

/// Receipt-style summary returned from check-out
#[derive(Debug, Clone)]
pub struct CheckOutSummary {
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

/// Result of a successful check-out
#[derive(Debug, Clone)]
pub struct CheckOutOutcome {
    pub stay: Stay,
    pub summary: CheckOutSummary,
    pub cleaning_order_created: bool,
}

/// Orchestrates check-in and check-out across guests, rooms, reservations,
/// payments and the cleaning queue.
pub struct StayLifecycle {
    repos: Arc<dyn RepositoryProvider>,
    registry: GuestRegistry,
}

impl StayLifecycle {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        let registry = GuestRegistry::new(repos.clone());
        Self { repos, registry }
    }

    pub async fn check_in(&self, input: CheckInInput) -> DomainResult<CheckInOutcome> {
        self.check_in_at(input, Utc::now()).await
    }

    pub async fn check_out(&self, stay_id: i32, input: CheckOutInput) -> DomainResult<CheckOutOutcome> {
        self.check_out_at(stay_id, input, Utc::now()).await
    }

    /// Check-in with an explicit clock, so tests control elapsed time.
    pub async fn check_in_at(
        &self,
        input: CheckInInput,
        now: DateTime<Utc>,
    ) -> DomainResult<CheckInOutcome> {
        if input.nightly_price <= Decimal::ZERO {
            return Err(DomainError::Validation(
                "nightly_price must be greater than zero".to_string(),
            ));
        }

        // Guest upsert validates document and name.
        let guest = self
            .registry
            .upsert_guest(UpsertGuest {
                document_type: input.document_type.clone(),
                document_number: input.document_number.clone(),
                name: input.guest_name.clone(),
                surname: input.guest_surname.clone(),
                phone: input.guest_phone.clone(),
                email: input.guest_email.clone(),
                nationality: input.guest_nationality.clone(),
            })
            .await?;

        let room = self
            .repos
            .rooms()
            .find_by_id(input.room_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Room", "id", input.room_id))?;

        if !room.accepts_checkin() {
            return Err(DomainError::Conflict(format!(
                "Room {} cannot accept a check-in (status: {})",
                room.number, room.status
            )));
        }

        // Hard invariant: at most one active stay per room.
        if let Some(open) = self.repos.stays().find_active_for_room(room.id).await? {
            return Err(DomainError::Conflict(format!(
                "Room {} already has an active stay ({})",
                room.number, open.id
            )));
        }

        // Reservation sync is bookkeeping: the stay takes priority, a
        // failure here is logged and swallowed.
        if let Some(reservation_id) = input.reservation_id {
            if let Err(e) = self
                .repos
                .reservations()
                .set_status(reservation_id, ReservationStatus::CheckIn)
                .await
            {
                warn!(reservation_id, error = %e, "Reservation status sync failed during check-in");
            }
        }

        let nights = input.nights.unwrap_or(1).max(1);
        let tax_rate = self.repos.tax_config().get().await?.effective_rate();
        let totals = compute_totals(input.nightly_price, nights, tax_rate);

        let stay = Stay {
            id: 0,
            guest_id: guest.id,
            room_id: room.id,
            reservation_id: input.reservation_id,
            checkin_at: now,
            expected_checkout_date: input.expected_checkout_date,
            actual_checkout_at: None,
            status: StayStatus::Active,
            guest_status: GuestStatus::Inside,
            nightly_price: input.nightly_price,
            nights,
            subtotal: totals.subtotal,
            tax_rate: totals.tax_rate,
            tax_amount: totals.tax_amount,
            total: totals.total,
            adults: input.adults,
            children: input.children,
            notes: input.notes,
            created_at: now,
        };
        let stay = self.repos.stays().insert(stay).await?;

        // Best-effort room flag; the stay row already persisted and is not
        // rolled back if this write fails.
        if let Err(e) = self
            .repos
            .rooms()
            .set_status(room.id, RoomStatus::Occupied)
            .await
        {
            warn!(room_id = room.id, stay_id = stay.id, error = %e,
                "Room status update failed after check-in");
        }

        let message = format!(
            "Check-in completed: {} in room {} for {} night(s)",
            guest.full_name(),
            room.number,
            nights
        );
        info!(stay_id = stay.id, room = %room.number, guest_id = guest.id, "Check-in completed");

        Ok(CheckInOutcome {
            stay,
            guest,
            room,
            message,
        })
    }

    /// Check-out with an explicit clock, so tests control elapsed time.
    pub async fn check_out_at(
        &self,
        stay_id: i32,
        input: CheckOutInput,
        now: DateTime<Utc>,
    ) -> DomainResult<CheckOutOutcome> {
        let mut stay = self
            .repos
            .stays()
            .find_by_id(stay_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Stay", "id", stay_id))?;

        if stay.status == StayStatus::Checkout {
            return Err(DomainError::Conflict(format!(
                "Stay {} is already checked out",
                stay_id
            )));
        }

        let guest = self
            .repos
            .guests()
            .find_by_id(stay.guest_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Guest", "id", stay.guest_id))?;
        let room = self
            .repos
            .rooms()
            .find_by_id(stay.room_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Room", "id", stay.room_id))?;

        // Bill by wall-clock time, not the expected checkout date. Early and
        // late departures both trigger a recomputation.
        let actual_nights = elapsed_nights(stay.checkin_at, now);
        if actual_nights != stay.nights {
            let totals = compute_totals(stay.nightly_price, actual_nights, stay.tax_rate);
            stay.apply_totals(actual_nights, totals);
        }
        stay.total += input.additional_charges;

        stay.actual_checkout_at = Some(now);
        stay.status = StayStatus::Checkout;
        stay.guest_status = GuestStatus::Checkout;
        if let Some(notes) = &input.notes {
            stay.append_note(notes);
        }
        self.repos.stays().update(stay.clone()).await?;

        // Room turnover and the cleaning order are conveniences, never a
        // reason to fail a completed checkout.
        if let Err(e) = self
            .repos
            .rooms()
            .set_status(room.id, RoomStatus::Cleaning)
            .await
        {
            warn!(room_id = room.id, stay_id, error = %e,
                "Room status update failed after check-out");
        }

        let order = ServiceOrder::after_checkout(
            room.id,
            format!("Room {} after checkout of {}", room.number, guest.full_name()),
        );
        let cleaning_order_created = match self.repos.service_orders().insert(order).await {
            Ok(created) => {
                info!(order_id = created.id, room = %room.number, "Cleaning order queued");
                true
            }
            Err(e) => {
                warn!(room_id = room.id, stay_id, error = %e,
                    "Cleaning order creation failed after check-out");
                false
            }
        };

        let payments = self.repos.payments().find_for_stay(stay_id).await?;
        let paid = paid_sum(&payments);
        let summary = CheckOutSummary {
            room_number: room.number.clone(),
            guest_name: guest.full_name(),
            actual_nights,
            subtotal: stay.subtotal,
            tax_amount: stay.tax_amount,
            additional_charges: input.additional_charges,
            total: stay.total,
            paid,
            balance_due: stay.total - paid,
        };

        info!(stay_id, room = %room.number, nights = actual_nights,
            total = %stay.total, "Check-out completed");

        Ok(CheckOutOutcome {
            stay,
            summary,
            cleaning_order_created,
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    use crate::domain::reservation::Reservation;
    use crate::domain::room::RoomType;
    use crate::domain::service_order::{OrderPriority, OrderStatus};
    use crate::infrastructure::storage::InMemoryRepositoryProvider;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    async fn setup() -> (StayLifecycle, Arc<InMemoryRepositoryProvider>, i32) {
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
        (StayLifecycle::new(repos.clone()), repos, room.id)
    }

    fn ana_checkin(room_id: i32) -> CheckInInput {
        CheckInInput {
            document_type: "dni".into(),
            document_number: "12345678".into(),
            guest_name: "Ana".into(),
            guest_surname: Some("Pérez".into()),
            guest_phone: None,
            guest_email: None,
            guest_nationality: Some("PE".into()),
            room_id,
            reservation_id: None,
            expected_checkout_date: Utc::now().date_naive() + Duration::days(1),
            nightly_price: dec("80"),
            nights: Some(1),
            adults: 1,
            children: 0,
            notes: None,
        }
    }

    #[tokio::test]
    async fn checkin_computes_totals_and_occupies_room() {
        // Scenario: room 101 at 80/night, one night, 18% tax.
        let (lifecycle, repos, room_id) = setup().await;

        let outcome = lifecycle.check_in(ana_checkin(room_id)).await.unwrap();
        let stay = &outcome.stay;
        assert_eq!(stay.subtotal, dec("80.00"));
        assert_eq!(stay.tax_amount, dec("14.40"));
        assert_eq!(stay.total, dec("94.40"));
        assert_eq!(stay.status, StayStatus::Active);
        assert_eq!(stay.guest_status, GuestStatus::Inside);

        let room = repos.rooms().find_by_id(room_id).await.unwrap().unwrap();
        assert_eq!(room.status, RoomStatus::Occupied);
        assert!(outcome.message.contains("Ana Pérez"));
        assert!(outcome.message.contains("101"));
    }

    #[tokio::test]
    async fn checkin_into_occupied_room_conflicts() {
        let (lifecycle, _repos, room_id) = setup().await;
        lifecycle.check_in(ana_checkin(room_id)).await.unwrap();

        let mut second = ana_checkin(room_id);
        second.document_number = "87654321".into();
        second.guest_name = "Luis".into();
        let err = lifecycle.check_in(second).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn checkin_into_cleaning_room_is_allowed() {
        let (lifecycle, repos, room_id) = setup().await;
        repos
            .rooms()
            .set_status(room_id, RoomStatus::Cleaning)
            .await
            .unwrap();

        let outcome = lifecycle.check_in(ana_checkin(room_id)).await;
        assert!(outcome.is_ok());
    }

    #[tokio::test]
    async fn checkin_into_maintenance_room_conflicts() {
        let (lifecycle, repos, room_id) = setup().await;
        repos
            .rooms()
            .set_status(room_id, RoomStatus::Maintenance)
            .await
            .unwrap();

        let err = lifecycle.check_in(ana_checkin(room_id)).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn checkin_unknown_room_is_not_found() {
        let (lifecycle, _repos, _room_id) = setup().await;
        let mut input = ana_checkin(999);
        input.room_id = 999;
        let err = lifecycle.check_in(input).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn checkin_consumes_reservation() {
        let (lifecycle, repos, room_id) = setup().await;
        let today = Utc::now().date_naive();
        let reservation = repos
            .reservations()
            .insert(Reservation::new(
                room_id,
                None,
                "Ana Pérez",
                today,
                today + Duration::days(1),
                dec("80"),
                Decimal::ZERO,
            ))
            .await
            .unwrap();

        let mut input = ana_checkin(room_id);
        input.reservation_id = Some(reservation.id);
        lifecycle.check_in(input).await.unwrap();

        let updated = repos
            .reservations()
            .find_by_id(reservation.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, ReservationStatus::CheckIn);
    }

    #[tokio::test]
    async fn failed_reservation_sync_does_not_abort_checkin() {
        let (lifecycle, _repos, room_id) = setup().await;
        let mut input = ana_checkin(room_id);
        // No such reservation: the sync fails, the check-in goes through.
        input.reservation_id = Some(4242);
        let outcome = lifecycle.check_in(input).await;
        assert!(outcome.is_ok());
    }

    #[tokio::test]
    async fn checkout_one_day_later_with_extras() {
        // Scenario: check out exactly one day later with 10 in extras.
        let (lifecycle, repos, room_id) = setup().await;
        let checkin_time = Utc::now();
        let outcome = lifecycle
            .check_in_at(ana_checkin(room_id), checkin_time)
            .await
            .unwrap();

        let result = lifecycle
            .check_out_at(
                outcome.stay.id,
                CheckOutInput {
                    notes: Some("left keys at desk".into()),
                    additional_charges: dec("10"),
                },
                checkin_time + Duration::days(1),
            )
            .await
            .unwrap();

        assert_eq!(result.summary.actual_nights, 1);
        assert_eq!(result.summary.total, dec("104.40"));
        assert_eq!(result.stay.total, dec("104.40"));
        assert_eq!(result.stay.status, StayStatus::Checkout);
        assert_eq!(result.stay.guest_status, GuestStatus::Checkout);
        assert!(result.cleaning_order_created);

        let room = repos.rooms().find_by_id(room_id).await.unwrap().unwrap();
        assert_eq!(room.status, RoomStatus::Cleaning);

        let orders = repos.service_orders().find_all(None).await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].priority, OrderPriority::High);
        assert_eq!(orders[0].status, OrderStatus::Pending);
        assert_eq!(orders[0].room_id, Some(room_id));
        assert!(orders[0].notes.as_deref().unwrap().contains("101"));
    }

    #[tokio::test]
    async fn late_departure_rebills_by_elapsed_nights() {
        let (lifecycle, _repos, room_id) = setup().await;
        let checkin_time = Utc::now();
        let outcome = lifecycle
            .check_in_at(ana_checkin(room_id), checkin_time)
            .await
            .unwrap();

        // Booked one night, left after three.
        let result = lifecycle
            .check_out_at(
                outcome.stay.id,
                CheckOutInput::default(),
                checkin_time + Duration::days(3),
            )
            .await
            .unwrap();

        assert_eq!(result.stay.nights, 3);
        assert_eq!(result.stay.subtotal, dec("240.00"));
        assert_eq!(result.stay.tax_amount, dec("43.20"));
        assert_eq!(result.stay.total, dec("283.20"));
    }

    #[tokio::test]
    async fn early_departure_within_first_day_still_bills_one_night() {
        let (lifecycle, _repos, room_id) = setup().await;
        let checkin_time = Utc::now();
        let mut input = ana_checkin(room_id);
        input.nights = Some(4);
        let outcome = lifecycle.check_in_at(input, checkin_time).await.unwrap();
        assert_eq!(outcome.stay.total, dec("377.60"));

        let result = lifecycle
            .check_out_at(
                outcome.stay.id,
                CheckOutInput::default(),
                checkin_time + Duration::hours(5),
            )
            .await
            .unwrap();

        assert_eq!(result.stay.nights, 1);
        assert_eq!(result.stay.total, dec("94.40"));
    }

    #[tokio::test]
    async fn double_checkout_conflicts_and_does_not_mutate() {
        let (lifecycle, repos, room_id) = setup().await;
        let checkin_time = Utc::now();
        let outcome = lifecycle
            .check_in_at(ana_checkin(room_id), checkin_time)
            .await
            .unwrap();

        lifecycle
            .check_out_at(
                outcome.stay.id,
                CheckOutInput::default(),
                checkin_time + Duration::days(1),
            )
            .await
            .unwrap();
        let after_first = repos
            .stays()
            .find_by_id(outcome.stay.id)
            .await
            .unwrap()
            .unwrap();

        let err = lifecycle
            .check_out_at(
                outcome.stay.id,
                CheckOutInput {
                    notes: None,
                    additional_charges: dec("50"),
                },
                checkin_time + Duration::days(2),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        let after_second = repos
            .stays()
            .find_by_id(outcome.stay.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(after_second.total, after_first.total);
        assert_eq!(after_second.nights, after_first.nights);
    }

    #[tokio::test]
    async fn checkout_notes_append_to_checkin_notes() {
        let (lifecycle, _repos, room_id) = setup().await;
        let checkin_time = Utc::now();
        let mut input = ana_checkin(room_id);
        input.notes = Some("arrived late".into());
        let outcome = lifecycle.check_in_at(input, checkin_time).await.unwrap();

        let result = lifecycle
            .check_out_at(
                outcome.stay.id,
                CheckOutInput {
                    notes: Some("minibar consumed".into()),
                    additional_charges: Decimal::ZERO,
                },
                checkin_time + Duration::days(1),
            )
            .await
            .unwrap();

        assert_eq!(
            result.stay.notes.as_deref(),
            Some("arrived late\nminibar consumed")
        );
    }

    #[tokio::test]
    async fn exempt_zone_checkin_has_zero_tax() {
        let (lifecycle, repos, room_id) = setup().await;
        let mut cfg = repos.tax_config().get().await.unwrap();
        cfg.exempt_zone = true;
        repos.tax_config().update(cfg).await.unwrap();

        let outcome = lifecycle.check_in(ana_checkin(room_id)).await.unwrap();
        assert_eq!(outcome.stay.tax_amount, Decimal::ZERO);
        assert_eq!(outcome.stay.total, dec("80.00"));
    }
}
