//! SeaORM implementation of RoomRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::room::{Room, RoomRepository, RoomStatus, RoomType};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::room;

pub struct SeaOrmRoomRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoomRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: room::Model) -> Room {
    Room {
        id: m.id,
        number: m.number,
        room_type: RoomType::from_str(&m.room_type).unwrap_or(RoomType::Simple),
        capacity: m.capacity,
        floor: m.floor,
        status: RoomStatus::from_str(&m.status),
        base_price: m.base_price,
        notes: m.notes,
        active: m.active,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn to_active(r: &Room) -> room::ActiveModel {
    room::ActiveModel {
        id: Set(r.id),
        number: Set(r.number.clone()),
        room_type: Set(r.room_type.as_str().to_string()),
        capacity: Set(r.capacity),
        floor: Set(r.floor),
        status: Set(r.status.as_str().to_string()),
        base_price: Set(r.base_price),
        notes: Set(r.notes.clone()),
        active: Set(r.active),
        created_at: Set(r.created_at),
        updated_at: Set(r.updated_at),
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Internal(format!("Database error: {}", e))
}

// ── RoomRepository impl ─────────────────────────────────────────

#[async_trait]
impl RoomRepository for SeaOrmRoomRepository {
    async fn insert(&self, r: Room) -> DomainResult<Room> {
        debug!("Inserting room: {}", r.number);

        let mut model = to_active(&r);
        model.id = NotSet;
        let inserted = model.insert(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                DomainError::Conflict(format!("room number '{}' already exists", r.number))
            } else {
                db_err(e)
            }
        })?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>> {
        let model = room::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_number(&self, number: &str) -> DomainResult<Option<Room>> {
        let model = room::Entity::find()
            .filter(room::Column::Number.eq(number))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self, include_inactive: bool) -> DomainResult<Vec<Room>> {
        let mut query = room::Entity::find().order_by_asc(room::Column::Number);
        if !include_inactive {
            query = query.filter(room::Column::Active.eq(true));
        }
        let models = query.all(&self.db).await.map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_status(&self, status: RoomStatus) -> DomainResult<Vec<Room>> {
        let models = room::Entity::find()
            .filter(room::Column::Active.eq(true))
            .filter(room::Column::Status.eq(status.as_str()))
            .order_by_asc(room::Column::Number)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update(&self, r: Room) -> DomainResult<()> {
        debug!("Updating room: {}", r.id);

        let existing = room::Entity::find_by_id(r.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_none() {
            return Err(DomainError::not_found("room", "id", r.id));
        }

        let mut model = to_active(&r);
        model.updated_at = Set(Utc::now());
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn set_status(&self, id: i32, status: RoomStatus) -> DomainResult<()> {
        debug!("Setting room {} status to {}", id, status);

        let existing = room::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("room", "id", id))?;

        let mut model: room::ActiveModel = existing.into();
        model.status = Set(status.as_str().to_string());
        model.updated_at = Set(Utc::now());
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn deactivate(&self, id: i32) -> DomainResult<()> {
        debug!("Deactivating room: {}", id);

        let existing = room::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("room", "id", id))?;

        let mut model: room::ActiveModel = existing.into();
        model.active = Set(false);
        model.updated_at = Set(Utc::now());
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
