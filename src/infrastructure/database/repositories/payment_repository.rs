//! SeaORM implementation of PaymentRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::payment::{Payment, PaymentRepository, PaymentStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::payment;

pub struct SeaOrmPaymentRepository {
    db: DatabaseConnection,
}

impl SeaOrmPaymentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: payment::Model) -> Payment {
    Payment {
        id: m.id,
        stay_id: m.stay_id,
        amount: m.amount,
        method: m.method,
        concept: m.concept,
        reference: m.reference,
        status: PaymentStatus::from_str(&m.status),
        recorded_at: m.recorded_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Internal(format!("Database error: {}", e))
}

// ── PaymentRepository impl ──────────────────────────────────────

#[async_trait]
impl PaymentRepository for SeaOrmPaymentRepository {
    async fn insert(&self, p: Payment) -> DomainResult<Payment> {
        debug!("Recording payment of {} for stay {}", p.amount, p.stay_id);

        let model = payment::ActiveModel {
            id: NotSet,
            stay_id: Set(p.stay_id),
            amount: Set(p.amount),
            method: Set(p.method.clone()),
            concept: Set(p.concept.clone()),
            reference: Set(p.reference.clone()),
            status: Set(p.status.as_str().to_string()),
            recorded_at: Set(p.recorded_at),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Payment>> {
        let model = payment::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_for_stay(&self, stay_id: i32) -> DomainResult<Vec<Payment>> {
        let models = payment::Entity::find()
            .filter(payment::Column::StayId.eq(stay_id))
            .order_by_asc(payment::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_recorded_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<Vec<Payment>> {
        let models = payment::Entity::find()
            .filter(payment::Column::RecordedAt.gte(start))
            .filter(payment::Column::RecordedAt.lt(end))
            .order_by_asc(payment::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn set_status(&self, id: i32, status: PaymentStatus) -> DomainResult<()> {
        debug!("Setting payment {} status to {}", id, status);

        let existing = payment::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("payment", "id", id))?;

        let mut model: payment::ActiveModel = existing.into();
        model.status = Set(status.as_str().to_string());
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
