//! Service order repository interface

use async_trait::async_trait;

use super::model::{OrderStatus, ServiceOrder};
use crate::domain::DomainResult;

#[async_trait]
pub trait ServiceOrderRepository: Send + Sync {
    /// Insert a new order; the store assigns the id
    async fn insert(&self, order: ServiceOrder) -> DomainResult<ServiceOrder>;

    /// Find order by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ServiceOrder>>;

    /// All orders, optionally filtered by status, newest first
    async fn find_all(&self, status: Option<OrderStatus>) -> DomainResult<Vec<ServiceOrder>>;

    /// Pending orders for a room
    async fn find_pending_for_room(&self, room_id: i32) -> DomainResult<Vec<ServiceOrder>>;

    /// Update an existing order
    async fn update(&self, order: ServiceOrder) -> DomainResult<()>;
}
