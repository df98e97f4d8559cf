//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::guest::GuestRepository;
use crate::domain::payment::PaymentRepository;
use crate::domain::pricing::{RateRepository, SeasonRepository, TaxConfigRepository};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::reservation::ReservationRepository;
use crate::domain::room::RoomRepository;
use crate::domain::service_order::ServiceOrderRepository;
use crate::domain::stay::StayRepository;
use crate::domain::user::UserRepository;

use super::guest_repository::SeaOrmGuestRepository;
use super::payment_repository::SeaOrmPaymentRepository;
use super::pricing_repository::{
    SeaOrmRateRepository, SeaOrmSeasonRepository, SeaOrmTaxConfigRepository,
};
use super::reservation_repository::SeaOrmReservationRepository;
use super::room_repository::SeaOrmRoomRepository;
use super::service_order_repository::SeaOrmServiceOrderRepository;
use super::stay_repository::SeaOrmStayRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let room = repos.rooms().find_by_number("101").await?;
/// let stay = repos.stays().find_active_for_room(room.id).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    rooms: SeaOrmRoomRepository,
    guests: SeaOrmGuestRepository,
    reservations: SeaOrmReservationRepository,
    stays: SeaOrmStayRepository,
    payments: SeaOrmPaymentRepository,
    service_orders: SeaOrmServiceOrderRepository,
    seasons: SeaOrmSeasonRepository,
    rates: SeaOrmRateRepository,
    tax_config: SeaOrmTaxConfigRepository,
    users: SeaOrmUserRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            rooms: SeaOrmRoomRepository::new(db.clone()),
            guests: SeaOrmGuestRepository::new(db.clone()),
            reservations: SeaOrmReservationRepository::new(db.clone()),
            stays: SeaOrmStayRepository::new(db.clone()),
            payments: SeaOrmPaymentRepository::new(db.clone()),
            service_orders: SeaOrmServiceOrderRepository::new(db.clone()),
            seasons: SeaOrmSeasonRepository::new(db.clone()),
            rates: SeaOrmRateRepository::new(db.clone()),
            tax_config: SeaOrmTaxConfigRepository::new(db.clone()),
            users: SeaOrmUserRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn rooms(&self) -> &dyn RoomRepository {
        &self.rooms
    }

    fn guests(&self) -> &dyn GuestRepository {
        &self.guests
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        &self.reservations
    }

    fn stays(&self) -> &dyn StayRepository {
        &self.stays
    }

    fn payments(&self) -> &dyn PaymentRepository {
        &self.payments
    }

    fn service_orders(&self) -> &dyn ServiceOrderRepository {
        &self.service_orders
    }

    fn seasons(&self) -> &dyn SeasonRepository {
        &self.seasons
    }

    fn rates(&self) -> &dyn RateRepository {
        &self.rates
    }

    fn tax_config(&self) -> &dyn TaxConfigRepository {
        &self.tax_config
    }

    fn users(&self) -> &dyn UserRepository {
        &self.users
    }
}
