//! Reservation domain entity

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

/// Reservation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    /// Taken but not yet guaranteed
    Pending,
    /// Guaranteed (advance payment or explicit confirmation)
    Confirmed,
    /// Consumed by a stay
    CheckIn,
    /// Cancelled by guest or reception (soft delete)
    Cancelled,
    /// Guest never arrived
    NoShow,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::CheckIn => "checkin",
            Self::Cancelled => "cancelled",
            Self::NoShow => "no_show",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "confirmed" => Self::Confirmed,
            "checkin" => Self::CheckIn,
            "cancelled" => Self::Cancelled,
            "no_show" => Self::NoShow,
            _ => Self::Pending,
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Number of nights between two dates: calendar-day boundaries crossed,
/// the end date itself is not charged.
pub fn nights_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// A room held for a future stay
#[derive(Debug, Clone)]
pub struct Reservation {
    pub id: i32,
    pub room_id: i32,
    /// Linked once the guest record exists; walk-in bookings carry only a name
    pub guest_id: Option<i32>,
    pub client_name: String,
    /// First night, inclusive
    pub start_date: NaiveDate,
    /// Departure date, exclusive (not charged)
    pub end_date: NaiveDate,
    pub status: ReservationStatus,
    pub nightly_price: Decimal,
    pub nights: i32,
    pub estimated_total: Decimal,
    pub advance_payment: Decimal,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Build a new pending reservation; `nights` and `estimated_total` are
    /// derived from the date range. The caller has already rejected
    /// `start_date >= end_date`.
    pub fn new(
        room_id: i32,
        guest_id: Option<i32>,
        client_name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        nightly_price: Decimal,
        advance_payment: Decimal,
    ) -> Self {
        let nights = nights_between(start_date, end_date) as i32;
        let now = Utc::now();
        Self {
            id: 0,
            room_id,
            guest_id,
            client_name: client_name.into(),
            start_date,
            end_date,
            status: ReservationStatus::Pending,
            nightly_price,
            nights,
            estimated_total: nightly_price * Decimal::from(nights),
            advance_payment,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(
            self.status,
            ReservationStatus::Pending | ReservationStatus::Confirmed
        )
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn two_night_reservation_totals() {
        // 2024-12-01 .. 2024-12-03 at 100/night is two nights, total 200
        let r = Reservation::new(
            1,
            None,
            "Ana Pérez",
            date(2024, 12, 1),
            date(2024, 12, 3),
            Decimal::from(100),
            Decimal::ZERO,
        );
        assert_eq!(r.nights, 2);
        assert_eq!(r.estimated_total, Decimal::from(200));
        assert_eq!(r.status, ReservationStatus::Pending);
    }

    #[test]
    fn single_night_counts_one() {
        assert_eq!(nights_between(date(2024, 12, 1), date(2024, 12, 2)), 1);
    }

    #[test]
    fn end_date_is_not_charged() {
        assert_eq!(nights_between(date(2024, 12, 1), date(2024, 12, 8)), 7);
    }

    #[test]
    fn open_statuses() {
        let mut r = Reservation::new(
            1,
            None,
            "X",
            date(2025, 1, 1),
            date(2025, 1, 2),
            Decimal::from(50),
            Decimal::ZERO,
        );
        assert!(r.is_open());
        r.status = ReservationStatus::Confirmed;
        assert!(r.is_open());
        r.status = ReservationStatus::CheckIn;
        assert!(!r.is_open());
        r.status = ReservationStatus::Cancelled;
        assert!(!r.is_open());
    }

    #[test]
    fn status_roundtrip() {
        for status in &[
            ReservationStatus::Pending,
            ReservationStatus::Confirmed,
            ReservationStatus::CheckIn,
            ReservationStatus::Cancelled,
            ReservationStatus::NoShow,
        ] {
            assert_eq!(&ReservationStatus::from_str(status.as_str()), status);
        }
    }
}
