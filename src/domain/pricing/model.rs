//! Pricing domain entities: seasons, per-type rates, tax configuration

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::domain::room::RoomType;

/// Demand band for a season
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonType {
    Low,
    Mid,
    High,
}

impl SeasonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Mid => "mid",
            Self::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Mid,
        }
    }
}

impl std::fmt::Display for SeasonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named date range carrying a price multiplier.
///
/// Overlapping seasons are not disambiguated beyond first match.
#[derive(Debug, Clone)]
pub struct Season {
    pub id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub season_type: SeasonType,
    pub multiplier: Decimal,
    pub active: bool,
}

impl Season {
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.active && date >= self.start_date && date <= self.end_date
    }
}

/// Per-room-type price card, the fallback when no concrete room is chosen
#[derive(Debug, Clone)]
pub struct Rate {
    pub id: i32,
    pub room_type: RoomType,
    pub base_price: Decimal,
    pub weekend_price: Option<Decimal>,
    pub low_price: Option<Decimal>,
    pub mid_price: Option<Decimal>,
    pub high_price: Option<Decimal>,
    pub updated_at: DateTime<Utc>,
}

impl Rate {
    /// Season-specific price, falling back to the base price when the
    /// season-specific field is unset.
    pub fn price_for_season(&self, season: SeasonType) -> Decimal {
        let specific = match season {
            SeasonType::Low => self.low_price,
            SeasonType::Mid => self.mid_price,
            SeasonType::High => self.high_price,
        };
        specific.unwrap_or(self.base_price)
    }
}

/// Property-wide tax configuration (singleton row)
#[derive(Debug, Clone)]
pub struct TaxConfig {
    /// Tax rate in percent applied on the stay subtotal
    pub tax_rate_percent: Decimal,
    /// When set the property sits in a tax-exempt zone and stays carry 0 tax
    pub exempt_zone: bool,
    /// Legal reference shown on receipts when exempt
    pub exemption_law: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl TaxConfig {
    /// The rate actually applied to new stays
    pub fn effective_rate(&self) -> Decimal {
        if self.exempt_zone {
            Decimal::ZERO
        } else {
            self.tax_rate_percent
        }
    }
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            tax_rate_percent: Decimal::from(18),
            exempt_zone: false,
            exemption_law: None,
            updated_at: Utc::now(),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn season_covers_inclusive_range() {
        let season = Season {
            id: 1,
            name: "Summer".into(),
            start_date: date(2025, 1, 1),
            end_date: date(2025, 3, 15),
            season_type: SeasonType::High,
            multiplier: dec("1.25"),
            active: true,
        };
        assert!(season.covers(date(2025, 1, 1)));
        assert!(season.covers(date(2025, 3, 15)));
        assert!(!season.covers(date(2025, 3, 16)));
        assert!(!season.covers(date(2024, 12, 31)));
    }

    #[test]
    fn inactive_season_covers_nothing() {
        let season = Season {
            id: 1,
            name: "Old".into(),
            start_date: date(2025, 1, 1),
            end_date: date(2025, 12, 31),
            season_type: SeasonType::Low,
            multiplier: dec("0.8"),
            active: false,
        };
        assert!(!season.covers(date(2025, 6, 1)));
    }

    #[test]
    fn rate_falls_back_to_base_price() {
        let rate = Rate {
            id: 1,
            room_type: RoomType::Double,
            base_price: dec("90"),
            weekend_price: None,
            low_price: Some(dec("70")),
            mid_price: None,
            high_price: Some(dec("120")),
            updated_at: Utc::now(),
        };
        assert_eq!(rate.price_for_season(SeasonType::Low), dec("70"));
        assert_eq!(rate.price_for_season(SeasonType::Mid), dec("90"));
        assert_eq!(rate.price_for_season(SeasonType::High), dec("120"));
    }

    #[test]
    fn exempt_zone_zeroes_the_rate() {
        let cfg = TaxConfig {
            tax_rate_percent: dec("18"),
            exempt_zone: true,
            exemption_law: Some("Ley 27037".into()),
            updated_at: Utc::now(),
        };
        assert_eq!(cfg.effective_rate(), Decimal::ZERO);
    }

    #[test]
    fn default_tax_is_eighteen_percent() {
        let cfg = TaxConfig::default();
        assert_eq!(cfg.effective_rate(), dec("18"));
    }
}
