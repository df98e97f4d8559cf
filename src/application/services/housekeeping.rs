//! Housekeeping queue: cleaning and maintenance orders gating room turnover

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::room::RoomStatus;
use crate::domain::service_order::{
    OrderPriority, OrderStatus, ServiceOrder, ServiceType,
};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

/// Input for a manually created order
#[derive(Debug, Clone)]
pub struct CreateOrder {
    pub room_id: Option<i32>,
    pub service_type: ServiceType,
    pub priority: OrderPriority,
    pub notes: Option<String>,
}

pub struct Housekeeping {
    repos: Arc<dyn RepositoryProvider>,
}

impl Housekeeping {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn create_order(&self, input: CreateOrder) -> DomainResult<ServiceOrder> {
        if let Some(room_id) = input.room_id {
            self.repos
                .rooms()
                .find_by_id(room_id)
                .await?
                .ok_or_else(|| DomainError::not_found("Room", "id", room_id))?;
        }

        let order = ServiceOrder {
            id: 0,
            room_id: input.room_id,
            service_type: input.service_type,
            status: OrderStatus::Pending,
            priority: input.priority,
            notes: input.notes,
            created_at: Utc::now(),
            completed_at: None,
            resolved_by: None,
        };
        let order = self.repos.service_orders().insert(order).await?;
        info!(order_id = order.id, service = %order.service_type, "Service order created");
        Ok(order)
    }

    /// Complete an order. When it references a room, the room returns to
    /// `available`, the only automatic path out of the `cleaning` state.
    pub async fn complete_order(
        &self,
        order_id: i32,
        resolved_by: &str,
        notes: Option<String>,
    ) -> DomainResult<ServiceOrder> {
        let mut order = self
            .repos
            .service_orders()
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| DomainError::not_found("ServiceOrder", "id", order_id))?;

        if !order.is_pending() {
            return Err(DomainError::Conflict(format!(
                "Service order {} is already {}",
                order_id, order.status
            )));
        }

        order.status = OrderStatus::Completed;
        order.completed_at = Some(Utc::now());
        order.resolved_by = Some(resolved_by.to_string());
        if let Some(extra) = notes {
            match &mut order.notes {
                Some(existing) => {
                    existing.push('\n');
                    existing.push_str(&extra);
                }
                None => order.notes = Some(extra),
            }
        }
        self.repos.service_orders().update(order.clone()).await?;

        if let Some(room_id) = order.room_id {
            self.repos
                .rooms()
                .set_status(room_id, RoomStatus::Available)
                .await?;
        }

        info!(order_id, resolved_by, "Service order completed");
        Ok(order)
    }

    /// Cancel an order. Room state is untouched.
    pub async fn cancel_order(&self, order_id: i32) -> DomainResult<ServiceOrder> {
        let mut order = self
            .repos
            .service_orders()
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| DomainError::not_found("ServiceOrder", "id", order_id))?;

        if !order.is_pending() {
            return Err(DomainError::Conflict(format!(
                "Service order {} is already {}",
                order_id, order.status
            )));
        }

        order.status = OrderStatus::Cancelled;
        self.repos.service_orders().update(order.clone()).await?;
        info!(order_id, "Service order cancelled");
        Ok(order)
    }

    pub async fn list_orders(
        &self,
        status: Option<OrderStatus>,
    ) -> DomainResult<Vec<ServiceOrder>> {
        self.repos.service_orders().find_all(status).await
    }

    pub async fn get_order(&self, order_id: i32) -> DomainResult<ServiceOrder> {
        self.repos
            .service_orders()
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| DomainError::not_found("ServiceOrder", "id", order_id))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::room::{Room, RoomType};
    use crate::infrastructure::storage::InMemoryRepositoryProvider;

    async fn setup() -> (Housekeeping, Arc<InMemoryRepositoryProvider>, i32) {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let room = repos
            .rooms()
            .insert(Room {
                id: 0,
                number: "202".into(),
                room_type: RoomType::Simple,
                capacity: 1,
                floor: 2,
                status: RoomStatus::Cleaning,
                base_price: "60".parse().unwrap(),
                notes: None,
                active: true,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
            .await
            .unwrap();
        (Housekeeping::new(repos.clone()), repos, room.id)
    }

    #[tokio::test]
    async fn completing_cleaning_order_releases_room() {
        let (housekeeping, repos, room_id) = setup().await;
        let order = housekeeping
            .create_order(CreateOrder {
                room_id: Some(room_id),
                service_type: ServiceType::Cleaning,
                priority: OrderPriority::Normal,
                notes: None,
            })
            .await
            .unwrap();

        let completed = housekeeping
            .complete_order(order.id, "maria", Some("all good".into()))
            .await
            .unwrap();
        assert_eq!(completed.status, OrderStatus::Completed);
        assert_eq!(completed.resolved_by.as_deref(), Some("maria"));
        assert!(completed.completed_at.is_some());

        let room = repos.rooms().find_by_id(room_id).await.unwrap().unwrap();
        assert_eq!(room.status, RoomStatus::Available);
    }

    #[tokio::test]
    async fn cancelling_does_not_touch_room() {
        let (housekeeping, repos, room_id) = setup().await;
        let order = housekeeping
            .create_order(CreateOrder {
                room_id: Some(room_id),
                service_type: ServiceType::Cleaning,
                priority: OrderPriority::Low,
                notes: None,
            })
            .await
            .unwrap();

        housekeeping.cancel_order(order.id).await.unwrap();
        let room = repos.rooms().find_by_id(room_id).await.unwrap().unwrap();
        assert_eq!(room.status, RoomStatus::Cleaning);
    }

    #[tokio::test]
    async fn completing_twice_conflicts() {
        let (housekeeping, _repos, room_id) = setup().await;
        let order = housekeeping
            .create_order(CreateOrder {
                room_id: Some(room_id),
                service_type: ServiceType::Maintenance,
                priority: OrderPriority::High,
                notes: Some("broken lamp".into()),
            })
            .await
            .unwrap();

        housekeeping.complete_order(order.id, "jose", None).await.unwrap();
        let err = housekeeping
            .complete_order(order.id, "jose", None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn order_for_unknown_room_is_rejected() {
        let (housekeeping, _repos, _room_id) = setup().await;
        let err = housekeeping
            .create_order(CreateOrder {
                room_id: Some(555),
                service_type: ServiceType::Cleaning,
                priority: OrderPriority::Normal,
                notes: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn orders_without_room_complete_without_room_side_effects() {
        let (housekeeping, _repos, _room_id) = setup().await;
        let order = housekeeping
            .create_order(CreateOrder {
                room_id: None,
                service_type: ServiceType::Maintenance,
                priority: OrderPriority::Normal,
                notes: Some("lobby AC".into()),
            })
            .await
            .unwrap();
        let completed = housekeeping.complete_order(order.id, "jose", None).await;
        assert!(completed.is_ok());
    }
}
