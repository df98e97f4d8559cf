//! Pricing engine: base price × season multiplier × weekend surcharge

use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::domain::pricing::SeasonType;
use crate::domain::room::RoomType;
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

/// Where the base price comes from: a concrete room or a room-type rate card
#[derive(Debug, Clone, Copy)]
pub enum PriceSource {
    Room(i32),
    RoomType(RoomType),
}

/// Quote for a single night
#[derive(Debug, Clone)]
pub struct NightQuote {
    pub date: NaiveDate,
    pub base_price: Decimal,
    pub season_type: SeasonType,
    pub season_multiplier: Decimal,
    pub weekend_surcharge: bool,
    pub price: Decimal,
}

/// Quote for a date range `[start, end)`
#[derive(Debug, Clone)]
pub struct RangeQuote {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub per_night: Vec<NightQuote>,
    pub total: Decimal,
    pub average: Decimal,
}

/// Friday and Saturday are the premium nights at a leisure property.
fn is_weekend_night(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Fri | Weekday::Sat)
}

/// Computes suggested nightly prices. Seasons and rate cards come from the
/// store; nothing here mutates state.
pub struct PricingEngine {
    repos: Arc<dyn RepositoryProvider>,
}

impl PricingEngine {
    /// Fixed surcharge applied on Friday and Saturday nights: +10%
    const WEEKEND_MULTIPLIER: Decimal = Decimal::from_parts(110, 0, 0, false, 2);

    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Suggested price for one night.
    ///
    /// Base price resolution: a concrete room uses its own `base_price`; a
    /// room type uses the rate card's season-specific price, falling back to
    /// the card's base price. No matching active season means type `mid`
    /// and multiplier 1.00.
    pub async fn quote_night(&self, source: PriceSource, date: NaiveDate) -> DomainResult<NightQuote> {
        let season = self.repos.seasons().find_covering(date).await?;
        let (season_type, multiplier) = match &season {
            Some(s) => (s.season_type, s.multiplier),
            None => (SeasonType::Mid, Decimal::ONE),
        };

        let base_price = match source {
            PriceSource::Room(room_id) => {
                let room = self
                    .repos
                    .rooms()
                    .find_by_id(room_id)
                    .await?
                    .ok_or_else(|| DomainError::not_found("Room", "id", room_id))?;
                room.base_price
            }
            PriceSource::RoomType(room_type) => {
                let rate = self
                    .repos
                    .rates()
                    .find_by_room_type(room_type)
                    .await?
                    .ok_or_else(|| {
                        DomainError::not_found("Rate", "room_type", room_type.as_str())
                    })?;
                rate.price_for_season(season_type)
            }
        };

        let weekend_surcharge = is_weekend_night(date);
        let mut price = base_price * multiplier;
        if weekend_surcharge {
            price *= Self::WEEKEND_MULTIPLIER;
        }

        Ok(NightQuote {
            date,
            base_price,
            season_type,
            season_multiplier: multiplier,
            weekend_surcharge,
            price: price.round_dp(2),
        })
    }

    /// Per-night quotes over `[start, end)` plus total and arithmetic mean.
    ///
    /// Date ordering is the caller's responsibility (reservation creation
    /// rejects `start >= end`); an empty range yields an empty quote.
    pub async fn quote_range(
        &self,
        source: PriceSource,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> DomainResult<RangeQuote> {
        let mut per_night = Vec::new();
        let mut date = start_date;
        while date < end_date {
            per_night.push(self.quote_night(source, date).await?);
            date += Duration::days(1);
        }

        let total: Decimal = per_night.iter().map(|q| q.price).sum();
        let average = if per_night.is_empty() {
            Decimal::ZERO
        } else {
            (total / Decimal::from(per_night.len() as i64)).round_dp(2)
        };

        Ok(RangeQuote {
            start_date,
            end_date,
            per_night,
            total,
            average,
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::domain::pricing::{Rate, Season};
    use crate::domain::room::{Room, RoomStatus};
    use crate::infrastructure::storage::InMemoryRepositoryProvider;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn engine_with_room(base_price: &str) -> (PricingEngine, Arc<InMemoryRepositoryProvider>, i32) {
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
                base_price: dec(base_price),
                notes: None,
                active: true,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
            .await
            .unwrap();
        let engine = PricingEngine::new(repos.clone());
        (engine, repos, room.id)
    }

    #[tokio::test]
    async fn weekday_night_without_season_is_base_price() {
        let (engine, _repos, room_id) = engine_with_room("80").await;
        // 2025-06-04 is a Wednesday
        let quote = engine
            .quote_night(PriceSource::Room(room_id), date(2025, 6, 4))
            .await
            .unwrap();
        assert_eq!(quote.price, dec("80.00"));
        assert_eq!(quote.season_type, SeasonType::Mid);
        assert!(!quote.weekend_surcharge);
    }

    #[tokio::test]
    async fn friday_and_saturday_carry_ten_percent_surcharge() {
        let (engine, _repos, room_id) = engine_with_room("80").await;
        // 2025-06-05 Thu, 06 Fri, 07 Sat, 08 Sun
        let thursday = engine
            .quote_night(PriceSource::Room(room_id), date(2025, 6, 5))
            .await
            .unwrap();
        let friday = engine
            .quote_night(PriceSource::Room(room_id), date(2025, 6, 6))
            .await
            .unwrap();
        let saturday = engine
            .quote_night(PriceSource::Room(room_id), date(2025, 6, 7))
            .await
            .unwrap();
        let sunday = engine
            .quote_night(PriceSource::Room(room_id), date(2025, 6, 8))
            .await
            .unwrap();

        assert_eq!(friday.price, (thursday.price * dec("1.10")).round_dp(2));
        assert_eq!(saturday.price, (sunday.price * dec("1.10")).round_dp(2));
        assert!(!sunday.weekend_surcharge);
    }

    #[tokio::test]
    async fn season_multiplier_applies() {
        let (engine, repos, room_id) = engine_with_room("100").await;
        repos
            .seasons()
            .insert(Season {
                id: 0,
                name: "High summer".into(),
                start_date: date(2025, 1, 1),
                end_date: date(2025, 3, 31),
                season_type: SeasonType::High,
                multiplier: dec("1.25"),
                active: true,
            })
            .await
            .unwrap();

        // 2025-02-05 is a Wednesday inside the season
        let quote = engine
            .quote_night(PriceSource::Room(room_id), date(2025, 2, 5))
            .await
            .unwrap();
        assert_eq!(quote.price, dec("125.00"));
        assert_eq!(quote.season_type, SeasonType::High);

        // Friday inside the season stacks both multipliers
        let friday = engine
            .quote_night(PriceSource::Room(room_id), date(2025, 2, 7))
            .await
            .unwrap();
        assert_eq!(friday.price, dec("137.50"));
    }

    #[tokio::test]
    async fn room_type_quotes_use_rate_card_seasonal_price() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        repos
            .rates()
            .upsert(Rate {
                id: 0,
                room_type: RoomType::Suite,
                base_price: dec("200"),
                weekend_price: None,
                low_price: Some(dec("150")),
                mid_price: None,
                high_price: Some(dec("260")),
                updated_at: Utc::now(),
            })
            .await
            .unwrap();
        repos
            .seasons()
            .insert(Season {
                id: 0,
                name: "Low".into(),
                start_date: date(2025, 5, 1),
                end_date: date(2025, 5, 31),
                season_type: SeasonType::Low,
                multiplier: dec("0.90"),
                active: true,
            })
            .await
            .unwrap();
        let engine = PricingEngine::new(repos);

        // Wednesday in the low season: seasonal price times multiplier
        let quote = engine
            .quote_night(PriceSource::RoomType(RoomType::Suite), date(2025, 5, 7))
            .await
            .unwrap();
        assert_eq!(quote.base_price, dec("150"));
        assert_eq!(quote.price, dec("135.00"));

        // Outside any season the card falls back to base price
        let fallback = engine
            .quote_night(PriceSource::RoomType(RoomType::Suite), date(2025, 7, 2))
            .await
            .unwrap();
        assert_eq!(fallback.base_price, dec("200"));
    }

    #[tokio::test]
    async fn range_quote_charges_each_night_once() {
        let (engine, _repos, room_id) = engine_with_room("100").await;
        // Mon 2025-06-02 .. Thu 2025-06-05 -> three weekday nights
        let quote = engine
            .quote_range(PriceSource::Room(room_id), date(2025, 6, 2), date(2025, 6, 5))
            .await
            .unwrap();
        assert_eq!(quote.per_night.len(), 3);
        assert_eq!(quote.total, dec("300.00"));
        assert_eq!(quote.average, dec("100.00"));
    }

    #[tokio::test]
    async fn range_spanning_weekend_averages_correctly() {
        let (engine, _repos, room_id) = engine_with_room("100").await;
        // Thu 2025-06-05 .. Sun 2025-06-08: Thu 100, Fri 110, Sat 110
        let quote = engine
            .quote_range(PriceSource::Room(room_id), date(2025, 6, 5), date(2025, 6, 8))
            .await
            .unwrap();
        assert_eq!(quote.total, dec("320.00"));
        assert_eq!(quote.average, dec("106.67"));
    }

    #[tokio::test]
    async fn unknown_room_is_not_found() {
        let (engine, _repos, _room_id) = engine_with_room("80").await;
        let err = engine
            .quote_night(PriceSource::Room(999), date(2025, 6, 4))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
