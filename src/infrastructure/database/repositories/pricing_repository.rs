//! SeaORM implementations of the pricing repositories
//! (seasons, rate cards, tax configuration)

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::pricing::{
    Rate, RateRepository, Season, SeasonRepository, SeasonType, TaxConfig, TaxConfigRepository,
};
use crate::domain::room::RoomType;
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{rate, season, tax_config};

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Internal(format!("Database error: {}", e))
}

// ── Seasons ─────────────────────────────────────────────────────

pub struct SeaOrmSeasonRepository {
    db: DatabaseConnection,
}

impl SeaOrmSeasonRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn season_to_domain(m: season::Model) -> Season {
    Season {
        id: m.id,
        name: m.name,
        start_date: m.start_date,
        end_date: m.end_date,
        season_type: SeasonType::from_str(&m.season_type),
        multiplier: m.multiplier,
        active: m.active,
    }
}

fn season_to_active(s: &Season) -> season::ActiveModel {
    season::ActiveModel {
        id: Set(s.id),
        name: Set(s.name.clone()),
        start_date: Set(s.start_date),
        end_date: Set(s.end_date),
        season_type: Set(s.season_type.as_str().to_string()),
        multiplier: Set(s.multiplier),
        active: Set(s.active),
    }
}

#[async_trait]
impl SeasonRepository for SeaOrmSeasonRepository {
    async fn insert(&self, s: Season) -> DomainResult<Season> {
        debug!("Inserting season: {}", s.name);

        let mut model = season_to_active(&s);
        model.id = NotSet;
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(season_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Season>> {
        let model = season::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(season_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Season>> {
        let models = season::Entity::find()
            .order_by_asc(season::Column::StartDate)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(season_to_domain).collect())
    }

    async fn find_covering(&self, date: NaiveDate) -> DomainResult<Option<Season>> {
        // Lowest id wins among overlapping seasons
        let model = season::Entity::find()
            .filter(season::Column::Active.eq(true))
            .filter(season::Column::StartDate.lte(date))
            .filter(season::Column::EndDate.gte(date))
            .order_by_asc(season::Column::Id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(season_to_domain))
    }

    async fn update(&self, s: Season) -> DomainResult<()> {
        debug!("Updating season: {}", s.id);

        let existing = season::Entity::find_by_id(s.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_none() {
            return Err(DomainError::not_found("season", "id", s.id));
        }

        let model = season_to_active(&s);
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn deactivate(&self, id: i32) -> DomainResult<()> {
        debug!("Deactivating season: {}", id);

        let existing = season::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("season", "id", id))?;

        let mut model: season::ActiveModel = existing.into();
        model.active = Set(false);
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}

// ── Rates ───────────────────────────────────────────────────────

pub struct SeaOrmRateRepository {
    db: DatabaseConnection,
}

impl SeaOrmRateRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn rate_to_domain(m: rate::Model) -> Rate {
    Rate {
        id: m.id,
        room_type: RoomType::from_str(&m.room_type).unwrap_or(RoomType::Simple),
        base_price: m.base_price,
        weekend_price: m.weekend_price,
        low_price: m.low_price,
        mid_price: m.mid_price,
        high_price: m.high_price,
        updated_at: m.updated_at,
    }
}

#[async_trait]
impl RateRepository for SeaOrmRateRepository {
    async fn upsert(&self, r: Rate) -> DomainResult<Rate> {
        debug!("Upserting rate card for {}", r.room_type);

        let existing = rate::Entity::find()
            .filter(rate::Column::RoomType.eq(r.room_type.as_str()))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let model = rate::ActiveModel {
            id: match &existing {
                Some(m) => Set(m.id),
                None => NotSet,
            },
            room_type: Set(r.room_type.as_str().to_string()),
            base_price: Set(r.base_price),
            weekend_price: Set(r.weekend_price),
            low_price: Set(r.low_price),
            mid_price: Set(r.mid_price),
            high_price: Set(r.high_price),
            updated_at: Set(Utc::now()),
        };

        let saved = if existing.is_some() {
            model.update(&self.db).await.map_err(db_err)?
        } else {
            model.insert(&self.db).await.map_err(db_err)?
        };
        Ok(rate_to_domain(saved))
    }

    async fn find_by_room_type(&self, room_type: RoomType) -> DomainResult<Option<Rate>> {
        let model = rate::Entity::find()
            .filter(rate::Column::RoomType.eq(room_type.as_str()))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(rate_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Rate>> {
        let models = rate::Entity::find()
            .order_by_asc(rate::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(rate_to_domain).collect())
    }
}

// ── Tax configuration ───────────────────────────────────────────

const TAX_CONFIG_ID: i32 = 1;

pub struct SeaOrmTaxConfigRepository {
    db: DatabaseConnection,
}

impl SeaOrmTaxConfigRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaxConfigRepository for SeaOrmTaxConfigRepository {
    async fn get(&self) -> DomainResult<TaxConfig> {
        let model = tax_config::Entity::find_by_id(TAX_CONFIG_ID)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(match model {
            Some(m) => TaxConfig {
                tax_rate_percent: m.tax_rate_percent,
                exempt_zone: m.exempt_zone,
                exemption_law: m.exemption_law,
                updated_at: m.updated_at,
            },
            None => TaxConfig::default(),
        })
    }

    async fn update(&self, c: TaxConfig) -> DomainResult<()> {
        debug!("Updating tax configuration");

        let model = tax_config::ActiveModel {
            id: Set(TAX_CONFIG_ID),
            tax_rate_percent: Set(c.tax_rate_percent),
            exempt_zone: Set(c.exempt_zone),
            exemption_law: Set(c.exemption_law),
            updated_at: Set(Utc::now()),
        };

        let exists = tax_config::Entity::find_by_id(TAX_CONFIG_ID)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .is_some();
        if exists {
            model.update(&self.db).await.map_err(db_err)?;
        } else {
            model.insert(&self.db).await.map_err(db_err)?;
        }
        Ok(())
    }
}
