//! SeaORM implementation of ReservationRepository

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::reservation::{Reservation, ReservationRepository, ReservationStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::reservation;

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: reservation::Model) -> Reservation {
    Reservation {
        id: m.id,
        room_id: m.room_id,
        guest_id: m.guest_id,
        client_name: m.client_name,
        start_date: m.start_date,
        end_date: m.end_date,
        status: ReservationStatus::from_str(&m.status),
        nightly_price: m.nightly_price,
        nights: m.nights,
        estimated_total: m.estimated_total,
        advance_payment: m.advance_payment,
        notes: m.notes,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn to_active(r: &Reservation) -> reservation::ActiveModel {
    reservation::ActiveModel {
        id: Set(r.id),
        room_id: Set(r.room_id),
        guest_id: Set(r.guest_id),
        client_name: Set(r.client_name.clone()),
        start_date: Set(r.start_date),
        end_date: Set(r.end_date),
        status: Set(r.status.as_str().to_string()),
        nightly_price: Set(r.nightly_price),
        nights: Set(r.nights),
        estimated_total: Set(r.estimated_total),
        advance_payment: Set(r.advance_payment),
        notes: Set(r.notes.clone()),
        created_at: Set(r.created_at),
        updated_at: Set(r.updated_at),
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Internal(format!("Database error: {}", e))
}

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn insert(&self, r: Reservation) -> DomainResult<Reservation> {
        debug!("Inserting reservation for room {}", r.room_id);

        let mut model = to_active(&r);
        model.id = NotSet;
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>> {
        let model = reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self, status: Option<ReservationStatus>) -> DomainResult<Vec<Reservation>> {
        let mut query = reservation::Entity::find().order_by_desc(reservation::Column::Id);
        if let Some(status) = status {
            query = query.filter(reservation::Column::Status.eq(status.as_str()));
        }
        let models = query.all(&self.db).await.map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_overlapping(
        &self,
        room_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Vec<Reservation>> {
        // Half-open ranges: [a, b) and [c, d) overlap iff a < d && c < b
        let models = reservation::Entity::find()
            .filter(reservation::Column::RoomId.eq(room_id))
            .filter(
                reservation::Column::Status
                    .is_in([ReservationStatus::Pending.as_str(), ReservationStatus::Confirmed.as_str()]),
            )
            .filter(reservation::Column::StartDate.lt(end))
            .filter(reservation::Column::EndDate.gt(start))
            .order_by_asc(reservation::Column::StartDate)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update(&self, r: Reservation) -> DomainResult<()> {
        debug!("Updating reservation: {}", r.id);

        let existing = reservation::Entity::find_by_id(r.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_none() {
            return Err(DomainError::not_found("reservation", "id", r.id));
        }

        let mut model = to_active(&r);
        model.updated_at = Set(Utc::now());
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn set_status(&self, id: i32, status: ReservationStatus) -> DomainResult<()> {
        debug!("Setting reservation {} status to {}", id, status);

        let existing = reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("reservation", "id", id))?;

        let mut model: reservation::ActiveModel = existing.into();
        model.status = Set(status.as_str().to_string());
        model.updated_at = Set(Utc::now());
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
