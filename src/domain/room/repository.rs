//! Room repository interface

use async_trait::async_trait;

use super::model::{Room, RoomStatus};
use crate::domain::DomainResult;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Insert a new room; the store assigns the id
    async fn insert(&self, room: Room) -> DomainResult<Room>;

    /// Find a room by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>>;

    /// Find a room by its human-facing number
    async fn find_by_number(&self, number: &str) -> DomainResult<Option<Room>>;

    /// All rooms; `include_inactive` controls whether soft-deleted rooms appear
    async fn find_all(&self, include_inactive: bool) -> DomainResult<Vec<Room>>;

    /// Active rooms currently in the given status
    async fn find_by_status(&self, status: RoomStatus) -> DomainResult<Vec<Room>>;

    /// Update an existing room
    async fn update(&self, room: Room) -> DomainResult<()>;

    /// Transition a room's status
    async fn set_status(&self, id: i32, status: RoomStatus) -> DomainResult<()>;

    /// Soft-delete (set active = false)
    async fn deactivate(&self, id: i32) -> DomainResult<()>;
}
