//! Pricing DTOs: seasons, rate cards, tax configuration and quotes

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::services::{NightQuote, RangeQuote};
use crate::domain::pricing::{Rate, Season, TaxConfig};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SeasonDto {
    pub id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub season_type: String,
    pub multiplier: Decimal,
    pub active: bool,
}

impl From<Season> for SeasonDto {
    fn from(s: Season) -> Self {
        Self {
            id: s.id,
            name: s.name,
            start_date: s.start_date,
            end_date: s.end_date,
            season_type: s.season_type.to_string(),
            multiplier: s.multiplier,
            active: s.active,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSeasonRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// First covered date, inclusive
    pub start_date: NaiveDate,
    /// Last covered date, inclusive
    pub end_date: NaiveDate,
    /// "low", "mid" or "high"
    #[validate(length(min = 1))]
    pub season_type: String,
    pub multiplier: Decimal,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateSeasonRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub season_type: Option<String>,
    pub multiplier: Option<Decimal>,
    pub active: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RateDto {
    pub id: i32,
    pub room_type: String,
    pub base_price: Decimal,
    pub weekend_price: Option<Decimal>,
    pub low_price: Option<Decimal>,
    pub mid_price: Option<Decimal>,
    pub high_price: Option<Decimal>,
    pub updated_at: DateTime<Utc>,
}

impl From<Rate> for RateDto {
    fn from(r: Rate) -> Self {
        Self {
            id: r.id,
            room_type: r.room_type.to_string(),
            base_price: r.base_price,
            weekend_price: r.weekend_price,
            low_price: r.low_price,
            mid_price: r.mid_price,
            high_price: r.high_price,
            updated_at: r.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertRateRequest {
    pub base_price: Decimal,
    pub weekend_price: Option<Decimal>,
    pub low_price: Option<Decimal>,
    pub mid_price: Option<Decimal>,
    pub high_price: Option<Decimal>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TaxConfigDto {
    pub tax_rate_percent: Decimal,
    pub exempt_zone: bool,
    pub exemption_law: Option<String>,
    /// The rate actually applied to new stays
    pub effective_rate: Decimal,
    pub updated_at: DateTime<Utc>,
}

impl From<TaxConfig> for TaxConfigDto {
    fn from(c: TaxConfig) -> Self {
        let effective_rate = c.effective_rate();
        Self {
            tax_rate_percent: c.tax_rate_percent,
            exempt_zone: c.exempt_zone,
            exemption_law: c.exemption_law,
            effective_rate,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTaxConfigRequest {
    pub tax_rate_percent: Decimal,
    #[serde(default)]
    pub exempt_zone: bool,
    pub exemption_law: Option<String>,
}

/// Quote query. Exactly one of `room_id` and `room_type` must be set.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct QuoteQuery {
    pub room_id: Option<i32>,
    /// "simple", "double", "matrimonial", "suite"
    pub room_type: Option<String>,
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct QuoteRangeQuery {
    pub room_id: Option<i32>,
    pub room_type: Option<String>,
    /// First night, inclusive
    pub start_date: NaiveDate,
    /// Departure date, exclusive
    pub end_date: NaiveDate,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NightQuoteDto {
    pub date: NaiveDate,
    pub base_price: Decimal,
    pub season_type: String,
    pub season_multiplier: Decimal,
    pub weekend_surcharge: bool,
    pub price: Decimal,
}

impl From<NightQuote> for NightQuoteDto {
    fn from(q: NightQuote) -> Self {
        Self {
            date: q.date,
            base_price: q.base_price,
            season_type: q.season_type.to_string(),
            season_multiplier: q.season_multiplier,
            weekend_surcharge: q.weekend_surcharge,
            price: q.price,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RangeQuoteDto {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub per_night: Vec<NightQuoteDto>,
    pub total: Decimal,
    pub average: Decimal,
}

impl From<RangeQuote> for RangeQuoteDto {
    fn from(q: RangeQuote) -> Self {
        Self {
            start_date: q.start_date,
            end_date: q.end_date,
            per_night: q.per_night.into_iter().map(Into::into).collect(),
            total: q.total,
            average: q.average,
        }
    }
}
