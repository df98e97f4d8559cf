//! Unified repository access for the application layer

use crate::domain::guest::GuestRepository;
use crate::domain::payment::PaymentRepository;
use crate::domain::pricing::{RateRepository, SeasonRepository, TaxConfigRepository};
use crate::domain::reservation::ReservationRepository;
use crate::domain::room::RoomRepository;
use crate::domain::service_order::ServiceOrderRepository;
use crate::domain::stay::StayRepository;
use crate::domain::user::UserRepository;

/// Per-aggregate repository accessors behind one object.
///
/// Services hold an `Arc<dyn RepositoryProvider>` so tests can swap the
/// SeaORM-backed provider for the in-memory one.
pub trait RepositoryProvider: Send + Sync {
    fn rooms(&self) -> &dyn RoomRepository;
    fn guests(&self) -> &dyn GuestRepository;
    fn reservations(&self) -> &dyn ReservationRepository;
    fn stays(&self) -> &dyn StayRepository;
    fn payments(&self) -> &dyn PaymentRepository;
    fn service_orders(&self) -> &dyn ServiceOrderRepository;
    fn seasons(&self) -> &dyn SeasonRepository;
    fn rates(&self) -> &dyn RateRepository;
    fn tax_config(&self) -> &dyn TaxConfigRepository;
    fn users(&self) -> &dyn UserRepository;
}
