//! Payment domain entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Payment status. The ledger is append-only: voiding flips the status,
/// nothing is ever deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Voided,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Voided => "voided",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "pending" => Self::Pending,
            "voided" => Self::Voided,
            _ => Self::Paid,
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Money received against a stay
#[derive(Debug, Clone)]
pub struct Payment {
    pub id: i32,
    pub stay_id: i32,
    pub amount: Decimal,
    /// "cash", "card", "transfer", "yape", ...
    pub method: String,
    pub concept: Option<String>,
    /// External reference (voucher or operation number)
    pub reference: Option<String>,
    pub status: PaymentStatus,
    pub recorded_at: DateTime<Utc>,
}

impl Payment {
    pub fn counts_toward_balance(&self) -> bool {
        self.status == PaymentStatus::Paid
    }
}

/// Sum of paid amounts over a stay's payments
pub fn paid_sum<'a>(payments: impl IntoIterator<Item = &'a Payment>) -> Decimal {
    payments
        .into_iter()
        .filter(|p| p.counts_toward_balance())
        .map(|p| p.amount)
        .sum()
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(id: i32, amount: &str, status: PaymentStatus) -> Payment {
        Payment {
            id,
            stay_id: 1,
            amount: amount.parse().unwrap(),
            method: "cash".into(),
            concept: None,
            reference: None,
            status,
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn paid_sum_skips_voided_and_pending() {
        let payments = vec![
            payment(1, "50", PaymentStatus::Paid),
            payment(2, "30", PaymentStatus::Voided),
            payment(3, "20", PaymentStatus::Pending),
            payment(4, "10.50", PaymentStatus::Paid),
        ];
        assert_eq!(paid_sum(&payments), "60.50".parse().unwrap());
    }

    #[test]
    fn paid_sum_of_empty_ledger_is_zero() {
        assert_eq!(paid_sum(&[]), Decimal::ZERO);
    }

    #[test]
    fn status_roundtrip() {
        for status in &[
            PaymentStatus::Paid,
            PaymentStatus::Pending,
            PaymentStatus::Voided,
        ] {
            assert_eq!(&PaymentStatus::from_str(status.as_str()), status);
        }
    }
}
