//! SeaORM implementation of GuestRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};

use crate::domain::guest::{Guest, GuestRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::guest;

pub struct SeaOrmGuestRepository {
    db: DatabaseConnection,
}

impl SeaOrmGuestRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: guest::Model) -> Guest {
    Guest {
        id: m.id,
        document_type: m.document_type,
        document_number: m.document_number,
        name: m.name,
        surname: m.surname,
        phone: m.phone,
        email: m.email,
        nationality: m.nationality,
        frequent: m.frequent,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn to_active(g: &Guest) -> guest::ActiveModel {
    guest::ActiveModel {
        id: Set(g.id),
        document_type: Set(g.document_type.clone()),
        document_number: Set(g.document_number.clone()),
        name: Set(g.name.clone()),
        surname: Set(g.surname.clone()),
        phone: Set(g.phone.clone()),
        email: Set(g.email.clone()),
        nationality: Set(g.nationality.clone()),
        frequent: Set(g.frequent),
        created_at: Set(g.created_at),
        updated_at: Set(g.updated_at),
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Internal(format!("Database error: {}", e))
}

// ── GuestRepository impl ────────────────────────────────────────

#[async_trait]
impl GuestRepository for SeaOrmGuestRepository {
    async fn insert(&self, g: Guest) -> DomainResult<Guest> {
        debug!("Inserting guest: {} {}", g.document_type, g.document_number);

        let mut model = to_active(&g);
        model.id = NotSet;
        let inserted = model.insert(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                DomainError::Conflict(format!(
                    "guest with document {} {} already exists",
                    g.document_type, g.document_number
                ))
            } else {
                db_err(e)
            }
        })?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Guest>> {
        let model = guest::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_document(
        &self,
        document_type: &str,
        document_number: &str,
    ) -> DomainResult<Option<Guest>> {
        let model = guest::Entity::find()
            .filter(guest::Column::DocumentType.eq(document_type))
            .filter(guest::Column::DocumentNumber.eq(document_number))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Guest>> {
        let models = guest::Entity::find()
            .order_by_desc(guest::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn search(&self, query: &str) -> DomainResult<Vec<Guest>> {
        let pattern = format!("%{}%", query);
        let models = guest::Entity::find()
            .filter(
                Condition::any()
                    .add(guest::Column::Name.like(&pattern))
                    .add(guest::Column::Surname.like(&pattern))
                    .add(guest::Column::DocumentNumber.like(&pattern)),
            )
            .order_by_desc(guest::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update(&self, g: Guest) -> DomainResult<()> {
        debug!("Updating guest: {}", g.id);

        let existing = guest::Entity::find_by_id(g.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_none() {
            return Err(DomainError::not_found("guest", "id", g.id));
        }

        let mut model = to_active(&g);
        model.updated_at = Set(Utc::now());
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
