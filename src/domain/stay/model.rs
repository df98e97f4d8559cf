//! Stay domain entity: one guest's continuous occupancy of a room

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

/// Stay status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StayStatus {
    Active,
    Checkout,
}

impl StayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Checkout => "checkout",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "checkout" => Self::Checkout,
            _ => Self::Active,
        }
    }
}

impl std::fmt::Display for StayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where the guest currently is, tracked separately from billing status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestStatus {
    Inside,
    Outside,
    Checkout,
}

impl GuestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inside => "inside",
            Self::Outside => "outside",
            Self::Checkout => "checkout",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "outside" => Self::Outside,
            "checkout" => Self::Checkout,
            _ => Self::Inside,
        }
    }
}

impl std::fmt::Display for GuestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Billing totals for a stay, always kept consistent as a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayTotals {
    pub subtotal: Decimal,
    pub tax_rate: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
}

/// Compute subtotal/tax/total from nightly price, night count and tax rate
/// (percent). Rounded to 2 decimal places; `total = subtotal + tax_amount`
/// holds exactly.
pub fn compute_totals(nightly_price: Decimal, nights: i32, tax_rate: Decimal) -> StayTotals {
    let subtotal = (nightly_price * Decimal::from(nights)).round_dp(2);
    let tax_amount = (subtotal * tax_rate / Decimal::from(100)).round_dp(2);
    StayTotals {
        subtotal,
        tax_rate,
        tax_amount,
        total: subtotal + tax_amount,
    }
}

/// Nights actually elapsed since check-in: calendar-day boundaries crossed,
/// rounded up, never less than one. Early and late departures both bill by
/// wall-clock time, not by the expected checkout date.
pub fn elapsed_nights(checkin_at: DateTime<Utc>, now: DateTime<Utc>) -> i32 {
    let seconds = (now - checkin_at).num_seconds();
    const DAY: i64 = 86_400;
    let nights = (seconds + DAY - 1) / DAY; // ceil
    nights.max(1) as i32
}

/// A guest's occupancy of a room from check-in to check-out
#[derive(Debug, Clone)]
pub struct Stay {
    pub id: i32,
    pub guest_id: i32,
    pub room_id: i32,
    /// Set when the stay consumed a reservation
    pub reservation_id: Option<i32>,
    pub checkin_at: DateTime<Utc>,
    pub expected_checkout_date: NaiveDate,
    pub actual_checkout_at: Option<DateTime<Utc>>,
    pub status: StayStatus,
    pub guest_status: GuestStatus,
    pub nightly_price: Decimal,
    pub nights: i32,
    pub subtotal: Decimal,
    /// Tax rate in percent; zero in an exempt zone
    pub tax_rate: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
    pub adults: i32,
    pub children: i32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Stay {
    pub fn is_active(&self) -> bool {
        self.status == StayStatus::Active
    }

    /// Overwrite the billing block from a freshly computed set of totals
    pub fn apply_totals(&mut self, nights: i32, totals: StayTotals) {
        self.nights = nights;
        self.subtotal = totals.subtotal;
        self.tax_rate = totals.tax_rate;
        self.tax_amount = totals.tax_amount;
        self.total = totals.total;
    }

    /// Append a note, newline-separated, never overwriting earlier notes
    pub fn append_note(&mut self, note: &str) {
        if note.is_empty() {
            return;
        }
        match &mut self.notes {
            Some(existing) => {
                existing.push('\n');
                existing.push_str(note);
            }
            None => self.notes = Some(note.to_string()),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn totals_for_one_night_at_eighteen_percent() {
        let t = compute_totals(dec("80"), 1, dec("18"));
        assert_eq!(t.subtotal, dec("80.00"));
        assert_eq!(t.tax_amount, dec("14.40"));
        assert_eq!(t.total, dec("94.40"));
    }

    #[test]
    fn totals_invariant_holds() {
        for (price, nights, rate) in [("75.50", 3, "18"), ("120", 7, "10"), ("99.99", 2, "18")] {
            let t = compute_totals(dec(price), nights, dec(rate));
            assert_eq!(t.total, t.subtotal + t.tax_amount);
            assert_eq!(t.subtotal, (dec(price) * Decimal::from(nights)).round_dp(2));
        }
    }

    #[test]
    fn exempt_zone_has_zero_tax() {
        let t = compute_totals(dec("80"), 2, Decimal::ZERO);
        assert_eq!(t.tax_amount, Decimal::ZERO);
        assert_eq!(t.total, t.subtotal);
    }

    #[test]
    fn elapsed_nights_rounds_up() {
        let checkin = Utc::now();
        assert_eq!(elapsed_nights(checkin, checkin + Duration::hours(3)), 1);
        assert_eq!(elapsed_nights(checkin, checkin + Duration::hours(24)), 1);
        assert_eq!(elapsed_nights(checkin, checkin + Duration::hours(25)), 2);
        assert_eq!(elapsed_nights(checkin, checkin + Duration::days(3)), 3);
    }

    #[test]
    fn elapsed_nights_is_never_zero() {
        let checkin = Utc::now();
        assert_eq!(elapsed_nights(checkin, checkin), 1);
        assert_eq!(elapsed_nights(checkin, checkin + Duration::minutes(5)), 1);
    }

    #[test]
    fn append_note_preserves_existing() {
        let mut stay = sample_stay();
        stay.append_note("late arrival");
        stay.append_note("minibar restocked");
        assert_eq!(
            stay.notes.as_deref(),
            Some("late arrival\nminibar restocked")
        );
    }

    #[test]
    fn append_empty_note_is_noop() {
        let mut stay = sample_stay();
        stay.append_note("");
        assert!(stay.notes.is_none());
    }

    fn sample_stay() -> Stay {
        let totals = compute_totals(dec("80"), 1, dec("18"));
        Stay {
            id: 1,
            guest_id: 1,
            room_id: 1,
            reservation_id: None,
            checkin_at: Utc::now(),
            expected_checkout_date: Utc::now().date_naive() + Duration::days(1),
            actual_checkout_at: None,
            status: StayStatus::Active,
            guest_status: GuestStatus::Inside,
            nightly_price: dec("80"),
            nights: 1,
            subtotal: totals.subtotal,
            tax_rate: totals.tax_rate,
            tax_amount: totals.tax_amount,
            total: totals.total,
            adults: 1,
            children: 0,
            notes: None,
            created_at: Utc::now(),
        }
    }
}
