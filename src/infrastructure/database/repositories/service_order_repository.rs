//! SeaORM implementation of ServiceOrderRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::service_order::{
    OrderPriority, OrderStatus, ServiceOrder, ServiceOrderRepository, ServiceType,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::service_order;

pub struct SeaOrmServiceOrderRepository {
    db: DatabaseConnection,
}

impl SeaOrmServiceOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: service_order::Model) -> ServiceOrder {
    ServiceOrder {
        id: m.id,
        room_id: m.room_id,
        service_type: ServiceType::from_str(&m.service_type),
        status: OrderStatus::from_str(&m.status),
        priority: OrderPriority::from_str(&m.priority),
        notes: m.notes,
        created_at: m.created_at,
        completed_at: m.completed_at,
        resolved_by: m.resolved_by,
    }
}

fn to_active(o: &ServiceOrder) -> service_order::ActiveModel {
    service_order::ActiveModel {
        id: Set(o.id),
        room_id: Set(o.room_id),
        service_type: Set(o.service_type.as_str().to_string()),
        status: Set(o.status.as_str().to_string()),
        priority: Set(o.priority.as_str().to_string()),
        notes: Set(o.notes.clone()),
        created_at: Set(o.created_at),
        completed_at: Set(o.completed_at),
        resolved_by: Set(o.resolved_by.clone()),
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Internal(format!("Database error: {}", e))
}

// ── ServiceOrderRepository impl ─────────────────────────────────

#[async_trait]
impl ServiceOrderRepository for SeaOrmServiceOrderRepository {
    async fn insert(&self, o: ServiceOrder) -> DomainResult<ServiceOrder> {
        debug!("Inserting {} order for room {:?}", o.service_type, o.room_id);

        let mut model = to_active(&o);
        model.id = NotSet;
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ServiceOrder>> {
        let model = service_order::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self, status: Option<OrderStatus>) -> DomainResult<Vec<ServiceOrder>> {
        let mut query = service_order::Entity::find().order_by_desc(service_order::Column::Id);
        if let Some(status) = status {
            query = query.filter(service_order::Column::Status.eq(status.as_str()));
        }
        let models = query.all(&self.db).await.map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_pending_for_room(&self, room_id: i32) -> DomainResult<Vec<ServiceOrder>> {
        let models = service_order::Entity::find()
            .filter(service_order::Column::RoomId.eq(room_id))
            .filter(service_order::Column::Status.eq(OrderStatus::Pending.as_str()))
            .order_by_asc(service_order::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update(&self, o: ServiceOrder) -> DomainResult<()> {
        debug!("Updating service order: {}", o.id);

        let existing = service_order::Entity::find_by_id(o.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_none() {
            return Err(DomainError::not_found("service_order", "id", o.id));
        }

        let model = to_active(&o);
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
