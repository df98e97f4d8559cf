//! Pricing repository interfaces: seasons, rates, tax configuration

use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::{Rate, Season, TaxConfig};
use crate::domain::room::RoomType;
use crate::domain::DomainResult;

#[async_trait]
pub trait SeasonRepository: Send + Sync {
    /// Insert a new season; the store assigns the id
    async fn insert(&self, season: Season) -> DomainResult<Season>;

    /// Find season by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Season>>;

    /// All seasons, including inactive, by start date
    async fn find_all(&self) -> DomainResult<Vec<Season>>;

    /// First active season covering the date, if any
    async fn find_covering(&self, date: NaiveDate) -> DomainResult<Option<Season>>;

    /// Update an existing season
    async fn update(&self, season: Season) -> DomainResult<()>;

    /// Deactivate a season (soft delete)
    async fn deactivate(&self, id: i32) -> DomainResult<()>;
}

#[async_trait]
pub trait RateRepository: Send + Sync {
    /// Insert or replace the rate card for a room type
    async fn upsert(&self, rate: Rate) -> DomainResult<Rate>;

    /// The rate card for a room type, if configured
    async fn find_by_room_type(&self, room_type: RoomType) -> DomainResult<Option<Rate>>;

    /// All rate cards
    async fn find_all(&self) -> DomainResult<Vec<Rate>>;
}

#[async_trait]
pub trait TaxConfigRepository: Send + Sync {
    /// The singleton tax configuration; defaults are returned when the row
    /// was never written.
    async fn get(&self) -> DomainResult<TaxConfig>;

    /// Replace the singleton tax configuration
    async fn update(&self, config: TaxConfig) -> DomainResult<()>;
}
