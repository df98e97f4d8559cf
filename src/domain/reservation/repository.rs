//! Reservation repository interface

use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::{Reservation, ReservationStatus};
use crate::domain::DomainResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Insert a new reservation; the store assigns the id
    async fn insert(&self, reservation: Reservation) -> DomainResult<Reservation>;

    /// Find reservation by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>>;

    /// All reservations, optionally filtered by status, newest first
    async fn find_all(&self, status: Option<ReservationStatus>) -> DomainResult<Vec<Reservation>>;

    /// Open (pending/confirmed) reservations whose date range overlaps
    /// `[start, end)` for the given room
    async fn find_overlapping(
        &self,
        room_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Vec<Reservation>>;

    /// Update an existing reservation
    async fn update(&self, reservation: Reservation) -> DomainResult<()>;

    /// Transition a reservation's status
    async fn set_status(&self, id: i32, status: ReservationStatus) -> DomainResult<()>;
}
