//! SeaORM implementation of StayRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::stay::{GuestStatus, Stay, StayRepository, StayStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::stay;

pub struct SeaOrmStayRepository {
    db: DatabaseConnection,
}

impl SeaOrmStayRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: stay::Model) -> Stay {
    Stay {
        id: m.id,
        guest_id: m.guest_id,
        room_id: m.room_id,
        reservation_id: m.reservation_id,
        checkin_at: m.checkin_at,
        expected_checkout_date: m.expected_checkout_date,
        actual_checkout_at: m.actual_checkout_at,
        status: StayStatus::from_str(&m.status),
        guest_status: GuestStatus::from_str(&m.guest_status),
        nightly_price: m.nightly_price,
        nights: m.nights,
        subtotal: m.subtotal,
        tax_rate: m.tax_rate,
        tax_amount: m.tax_amount,
        total: m.total,
        adults: m.adults,
        children: m.children,
        notes: m.notes,
        created_at: m.created_at,
    }
}

fn to_active(s: &Stay) -> stay::ActiveModel {
    stay::ActiveModel {
        id: Set(s.id),
        guest_id: Set(s.guest_id),
        room_id: Set(s.room_id),
        reservation_id: Set(s.reservation_id),
        checkin_at: Set(s.checkin_at),
        expected_checkout_date: Set(s.expected_checkout_date),
        actual_checkout_at: Set(s.actual_checkout_at),
        status: Set(s.status.as_str().to_string()),
        guest_status: Set(s.guest_status.as_str().to_string()),
        nightly_price: Set(s.nightly_price),
        nights: Set(s.nights),
        subtotal: Set(s.subtotal),
        tax_rate: Set(s.tax_rate),
        tax_amount: Set(s.tax_amount),
        total: Set(s.total),
        adults: Set(s.adults),
        children: Set(s.children),
        notes: Set(s.notes.clone()),
        created_at: Set(s.created_at),
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Internal(format!("Database error: {}", e))
}

// ── StayRepository impl ─────────────────────────────────────────

#[async_trait]
impl StayRepository for SeaOrmStayRepository {
    async fn insert(&self, s: Stay) -> DomainResult<Stay> {
        debug!("Inserting stay for room {} guest {}", s.room_id, s.guest_id);

        let mut model = to_active(&s);
        model.id = NotSet;
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Stay>> {
        let model = stay::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self, active_only: bool) -> DomainResult<Vec<Stay>> {
        let mut query = stay::Entity::find().order_by_desc(stay::Column::Id);
        if active_only {
            query = query.filter(stay::Column::Status.eq(StayStatus::Active.as_str()));
        }
        let models = query.all(&self.db).await.map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_active_for_room(&self, room_id: i32) -> DomainResult<Option<Stay>> {
        let model = stay::Entity::find()
            .filter(stay::Column::RoomId.eq(room_id))
            .filter(stay::Column::Status.eq(StayStatus::Active.as_str()))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_checked_in_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<Vec<Stay>> {
        let models = stay::Entity::find()
            .filter(stay::Column::CheckinAt.gte(start))
            .filter(stay::Column::CheckinAt.lt(end))
            .order_by_asc(stay::Column::CheckinAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update(&self, s: Stay) -> DomainResult<()> {
        debug!("Updating stay: {}", s.id);

        let existing = stay::Entity::find_by_id(s.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_none() {
            return Err(DomainError::not_found("stay", "id", s.id));
        }

        let model = to_active(&s);
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
