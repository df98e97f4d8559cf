//! Stay repository interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::model::Stay;
use crate::domain::DomainResult;

#[async_trait]
pub trait StayRepository: Send + Sync {
    /// Insert a new stay; the store assigns the id
    async fn insert(&self, stay: Stay) -> DomainResult<Stay>;

    /// Find stay by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Stay>>;

    /// All stays, newest first; `active_only` keeps only open stays
    async fn find_all(&self, active_only: bool) -> DomainResult<Vec<Stay>>;

    /// The open stay for a room, if any. At most one exists.
    async fn find_active_for_room(&self, room_id: i32) -> DomainResult<Option<Stay>>;

    /// Stays that checked in inside `[start, end)`, for reporting
    async fn find_checked_in_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<Vec<Stay>>;

    /// Update an existing stay
    async fn update(&self, stay: Stay) -> DomainResult<()>;
}
