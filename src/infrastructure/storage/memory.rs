//! In-memory storage for development and testing

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use dashmap::DashMap;

use crate::domain::guest::{Guest, GuestRepository};
use crate::domain::payment::{Payment, PaymentRepository, PaymentStatus};
use crate::domain::pricing::{
    Rate, RateRepository, Season, SeasonRepository, TaxConfig, TaxConfigRepository,
};
use crate::domain::reservation::{Reservation, ReservationRepository, ReservationStatus};
use crate::domain::room::{Room, RoomRepository, RoomStatus, RoomType};
use crate::domain::service_order::{OrderStatus, ServiceOrder, ServiceOrderRepository};
use crate::domain::stay::{Stay, StayRepository, StayStatus};
use crate::domain::user::{User, UserRepository};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

/// Backs every repository trait with DashMaps. A single instance serves as
/// the whole `RepositoryProvider`.
pub struct InMemoryRepositoryProvider {
    rooms: DashMap<i32, Room>,
    guests: DashMap<i32, Guest>,
    reservations: DashMap<i32, Reservation>,
    stays: DashMap<i32, Stay>,
    payments: DashMap<i32, Payment>,
    service_orders: DashMap<i32, ServiceOrder>,
    seasons: DashMap<i32, Season>,
    rates: DashMap<String, Rate>,
    users: DashMap<String, User>,
    tax_config: RwLock<Option<TaxConfig>>,
    room_counter: AtomicI32,
    guest_counter: AtomicI32,
    reservation_counter: AtomicI32,
    stay_counter: AtomicI32,
    payment_counter: AtomicI32,
    order_counter: AtomicI32,
    season_counter: AtomicI32,
    rate_counter: AtomicI32,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self {
            rooms: DashMap::new(),
            guests: DashMap::new(),
            reservations: DashMap::new(),
            stays: DashMap::new(),
            payments: DashMap::new(),
            service_orders: DashMap::new(),
            seasons: DashMap::new(),
            rates: DashMap::new(),
            users: DashMap::new(),
            tax_config: RwLock::new(None),
            room_counter: AtomicI32::new(1),
            guest_counter: AtomicI32::new(1),
            reservation_counter: AtomicI32::new(1),
            stay_counter: AtomicI32::new(1),
            payment_counter: AtomicI32::new(1),
            order_counter: AtomicI32::new(1),
            season_counter: AtomicI32::new(1),
            rate_counter: AtomicI32::new(1),
        }
    }

    fn next(counter: &AtomicI32) -> i32 {
        counter.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for InMemoryRepositoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn rooms(&self) -> &dyn RoomRepository {
        self
    }
    fn guests(&self) -> &dyn GuestRepository {
        self
    }
    fn reservations(&self) -> &dyn ReservationRepository {
        self
    }
    fn stays(&self) -> &dyn StayRepository {
        self
    }
    fn payments(&self) -> &dyn PaymentRepository {
        self
    }
    fn service_orders(&self) -> &dyn ServiceOrderRepository {
        self
    }
    fn seasons(&self) -> &dyn SeasonRepository {
        self
    }
    fn rates(&self) -> &dyn RateRepository {
        self
    }
    fn tax_config(&self) -> &dyn TaxConfigRepository {
        self
    }
    fn users(&self) -> &dyn UserRepository {
        self
    }
}

#[async_trait]
impl RoomRepository for InMemoryRepositoryProvider {
    async fn insert(&self, mut room: Room) -> DomainResult<Room> {
        if self.rooms.iter().any(|r| r.number == room.number) {
            return Err(DomainError::Conflict(format!(
                "room number '{}' already exists",
                room.number
            )));
        }
        room.id = Self::next(&self.room_counter);
        self.rooms.insert(room.id, room.clone());
        Ok(room)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>> {
        Ok(self.rooms.get(&id).map(|r| r.clone()))
    }

    async fn find_by_number(&self, number: &str) -> DomainResult<Option<Room>> {
        Ok(self
            .rooms
            .iter()
            .find(|r| r.number == number)
            .map(|r| r.clone()))
    }

    async fn find_all(&self, include_inactive: bool) -> DomainResult<Vec<Room>> {
        let mut rooms: Vec<Room> = self
            .rooms
            .iter()
            .filter(|r| include_inactive || r.active)
            .map(|r| r.clone())
            .collect();
        rooms.sort_by(|a, b| a.number.cmp(&b.number));
        Ok(rooms)
    }

    async fn find_by_status(&self, status: RoomStatus) -> DomainResult<Vec<Room>> {
        let mut rooms: Vec<Room> = self
            .rooms
            .iter()
            .filter(|r| r.active && r.status == status)
            .map(|r| r.clone())
            .collect();
        rooms.sort_by(|a, b| a.number.cmp(&b.number));
        Ok(rooms)
    }

    async fn update(&self, mut room: Room) -> DomainResult<()> {
        if !self.rooms.contains_key(&room.id) {
            return Err(DomainError::not_found("room", "id", room.id));
        }
        room.updated_at = Utc::now();
        self.rooms.insert(room.id, room);
        Ok(())
    }

    async fn set_status(&self, id: i32, status: RoomStatus) -> DomainResult<()> {
        let mut room = self
            .rooms
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("room", "id", id))?;
        room.status = status;
        room.updated_at = Utc::now();
        Ok(())
    }

    async fn deactivate(&self, id: i32) -> DomainResult<()> {
        let mut room = self
            .rooms
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("room", "id", id))?;
        room.active = false;
        room.updated_at = Utc::now();
        Ok(())
    }
}

#[async_trait]
impl GuestRepository for InMemoryRepositoryProvider {
    async fn insert(&self, mut guest: Guest) -> DomainResult<Guest> {
        if self.guests.iter().any(|g| {
            g.document_type == guest.document_type && g.document_number == guest.document_number
        }) {
            return Err(DomainError::Conflict(format!(
                "guest with document {} {} already exists",
                guest.document_type, guest.document_number
            )));
        }
        guest.id = Self::next(&self.guest_counter);
        self.guests.insert(guest.id, guest.clone());
        Ok(guest)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Guest>> {
        Ok(self.guests.get(&id).map(|g| g.clone()))
    }

    async fn find_by_document(
        &self,
        document_type: &str,
        document_number: &str,
    ) -> DomainResult<Option<Guest>> {
        Ok(self
            .guests
            .iter()
            .find(|g| g.document_type == document_type && g.document_number == document_number)
            .map(|g| g.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Guest>> {
        let mut guests: Vec<Guest> = self.guests.iter().map(|g| g.clone()).collect();
        guests.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(guests)
    }

    async fn search(&self, query: &str) -> DomainResult<Vec<Guest>> {
        let needle = query.to_lowercase();
        let mut guests: Vec<Guest> = self
            .guests
            .iter()
            .filter(|g| {
                g.name.to_lowercase().contains(&needle)
                    || g.surname
                        .as_deref()
                        .is_some_and(|s| s.to_lowercase().contains(&needle))
                    || g.document_number.to_lowercase().contains(&needle)
            })
            .map(|g| g.clone())
            .collect();
        guests.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(guests)
    }

    async fn update(&self, mut guest: Guest) -> DomainResult<()> {
        if !self.guests.contains_key(&guest.id) {
            return Err(DomainError::not_found("guest", "id", guest.id));
        }
        guest.updated_at = Utc::now();
        self.guests.insert(guest.id, guest);
        Ok(())
    }
}

#[async_trait]
impl ReservationRepository for InMemoryRepositoryProvider {
    async fn insert(&self, mut reservation: Reservation) -> DomainResult<Reservation> {
        reservation.id = Self::next(&self.reservation_counter);
        self.reservations.insert(reservation.id, reservation.clone());
        Ok(reservation)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>> {
        Ok(self.reservations.get(&id).map(|r| r.clone()))
    }

    async fn find_all(&self, status: Option<ReservationStatus>) -> DomainResult<Vec<Reservation>> {
        let mut reservations: Vec<Reservation> = self
            .reservations
            .iter()
            .filter(|r| status.map_or(true, |s| r.status == s))
            .map(|r| r.clone())
            .collect();
        reservations.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(reservations)
    }

    async fn find_overlapping(
        &self,
        room_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Vec<Reservation>> {
        let mut reservations: Vec<Reservation> = self
            .reservations
            .iter()
            .filter(|r| {
                r.room_id == room_id && r.is_open() && r.start_date < end && r.end_date > start
            })
            .map(|r| r.clone())
            .collect();
        reservations.sort_by(|a, b| a.start_date.cmp(&b.start_date));
        Ok(reservations)
    }

    async fn update(&self, mut reservation: Reservation) -> DomainResult<()> {
        if !self.reservations.contains_key(&reservation.id) {
            return Err(DomainError::not_found("reservation", "id", reservation.id));
        }
        reservation.updated_at = Utc::now();
        self.reservations.insert(reservation.id, reservation);
        Ok(())
    }

    async fn set_status(&self, id: i32, status: ReservationStatus) -> DomainResult<()> {
        let mut reservation = self
            .reservations
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("reservation", "id", id))?;
        reservation.status = status;
        reservation.updated_at = Utc::now();
        Ok(())
    }
}

#[async_trait]
impl StayRepository for InMemoryRepositoryProvider {
    async fn insert(&self, mut stay: Stay) -> DomainResult<Stay> {
        stay.id = Self::next(&self.stay_counter);
        self.stays.insert(stay.id, stay.clone());
        Ok(stay)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Stay>> {
        Ok(self.stays.get(&id).map(|s| s.clone()))
    }

    async fn find_all(&self, active_only: bool) -> DomainResult<Vec<Stay>> {
        let mut stays: Vec<Stay> = self
            .stays
            .iter()
            .filter(|s| !active_only || s.status == StayStatus::Active)
            .map(|s| s.clone())
            .collect();
        stays.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(stays)
    }

    async fn find_active_for_room(&self, room_id: i32) -> DomainResult<Option<Stay>> {
        Ok(self
            .stays
            .iter()
            .find(|s| s.room_id == room_id && s.status == StayStatus::Active)
            .map(|s| s.clone()))
    }

    async fn find_checked_in_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<Vec<Stay>> {
        let mut stays: Vec<Stay> = self
            .stays
            .iter()
            .filter(|s| s.checkin_at >= start && s.checkin_at < end)
            .map(|s| s.clone())
            .collect();
        stays.sort_by(|a, b| a.checkin_at.cmp(&b.checkin_at));
        Ok(stays)
    }

    async fn update(&self, stay: Stay) -> DomainResult<()> {
        if !self.stays.contains_key(&stay.id) {
            return Err(DomainError::not_found("stay", "id", stay.id));
        }
        self.stays.insert(stay.id, stay);
        Ok(())
    }
}

#[async_trait]
impl PaymentRepository for InMemoryRepositoryProvider {
    async fn insert(&self, mut payment: Payment) -> DomainResult<Payment> {
        payment.id = Self::next(&self.payment_counter);
        self.payments.insert(payment.id, payment.clone());
        Ok(payment)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Payment>> {
        Ok(self.payments.get(&id).map(|p| p.clone()))
    }

    async fn find_for_stay(&self, stay_id: i32) -> DomainResult<Vec<Payment>> {
        let mut payments: Vec<Payment> = self
            .payments
            .iter()
            .filter(|p| p.stay_id == stay_id)
            .map(|p| p.clone())
            .collect();
        payments.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(payments)
    }

    async fn find_recorded_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<Vec<Payment>> {
        let mut payments: Vec<Payment> = self
            .payments
            .iter()
            .filter(|p| p.recorded_at >= start && p.recorded_at < end)
            .map(|p| p.clone())
            .collect();
        payments.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(payments)
    }

    async fn set_status(&self, id: i32, status: PaymentStatus) -> DomainResult<()> {
        let mut payment = self
            .payments
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("payment", "id", id))?;
        payment.status = status;
        Ok(())
    }
}

#[async_trait]
impl ServiceOrderRepository for InMemoryRepositoryProvider {
    async fn insert(&self, mut order: ServiceOrder) -> DomainResult<ServiceOrder> {
        order.id = Self::next(&self.order_counter);
        self.service_orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ServiceOrder>> {
        Ok(self.service_orders.get(&id).map(|o| o.clone()))
    }

    async fn find_all(&self, status: Option<OrderStatus>) -> DomainResult<Vec<ServiceOrder>> {
        let mut orders: Vec<ServiceOrder> = self
            .service_orders
            .iter()
            .filter(|o| status.map_or(true, |s| o.status == s))
            .map(|o| o.clone())
            .collect();
        orders.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(orders)
    }

    async fn find_pending_for_room(&self, room_id: i32) -> DomainResult<Vec<ServiceOrder>> {
        let mut orders: Vec<ServiceOrder> = self
            .service_orders
            .iter()
            .filter(|o| o.room_id == Some(room_id) && o.is_pending())
            .map(|o| o.clone())
            .collect();
        orders.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(orders)
    }

    async fn update(&self, order: ServiceOrder) -> DomainResult<()> {
        if !self.service_orders.contains_key(&order.id) {
            return Err(DomainError::not_found("service_order", "id", order.id));
        }
        self.service_orders.insert(order.id, order);
        Ok(())
    }
}

#[async_trait]
impl SeasonRepository for InMemoryRepositoryProvider {
    async fn insert(&self, mut season: Season) -> DomainResult<Season> {
        season.id = Self::next(&self.season_counter);
        self.seasons.insert(season.id, season.clone());
        Ok(season)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Season>> {
        Ok(self.seasons.get(&id).map(|s| s.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Season>> {
        let mut seasons: Vec<Season> = self.seasons.iter().map(|s| s.clone()).collect();
        seasons.sort_by(|a, b| a.start_date.cmp(&b.start_date));
        Ok(seasons)
    }

    async fn find_covering(&self, date: NaiveDate) -> DomainResult<Option<Season>> {
        // Stable pick among overlapping seasons: lowest id wins
        let mut candidates: Vec<Season> = self
            .seasons
            .iter()
            .filter(|s| s.covers(date))
            .map(|s| s.clone())
            .collect();
        candidates.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(candidates.into_iter().next())
    }

    async fn update(&self, season: Season) -> DomainResult<()> {
        if !self.seasons.contains_key(&season.id) {
            return Err(DomainError::not_found("season", "id", season.id));
        }
        self.seasons.insert(season.id, season);
        Ok(())
    }

    async fn deactivate(&self, id: i32) -> DomainResult<()> {
        let mut season = self
            .seasons
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("season", "id", id))?;
        season.active = false;
        Ok(())
    }
}

#[async_trait]
impl RateRepository for InMemoryRepositoryProvider {
    async fn upsert(&self, mut rate: Rate) -> DomainResult<Rate> {
        let key = rate.room_type.as_str().to_string();
        match self.rates.get(&key) {
            Some(existing) => rate.id = existing.id,
            None => rate.id = Self::next(&self.rate_counter),
        }
        rate.updated_at = Utc::now();
        self.rates.insert(key, rate.clone());
        Ok(rate)
    }

    async fn find_by_room_type(&self, room_type: RoomType) -> DomainResult<Option<Rate>> {
        Ok(self.rates.get(room_type.as_str()).map(|r| r.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Rate>> {
        let mut rates: Vec<Rate> = self.rates.iter().map(|r| r.clone()).collect();
        rates.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(rates)
    }
}

#[async_trait]
impl TaxConfigRepository for InMemoryRepositoryProvider {
    async fn get(&self) -> DomainResult<TaxConfig> {
        let guard = self
            .tax_config
            .read()
            .map_err(|_| DomainError::Internal("tax config lock poisoned".into()))?;
        Ok(guard.clone().unwrap_or_default())
    }

    async fn update(&self, mut config: TaxConfig) -> DomainResult<()> {
        let mut guard = self
            .tax_config
            .write()
            .map_err(|_| DomainError::Internal("tax config lock poisoned".into()))?;
        config.updated_at = Utc::now();
        *guard = Some(config);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryRepositoryProvider {
    async fn insert(&self, user: User) -> DomainResult<User> {
        if self.users.iter().any(|u| u.username == user.username) {
            return Err(DomainError::Conflict(format!(
                "username '{}' already exists",
                user.username
            )));
        }
        self.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        Ok(self.users.get(id).map(|u| u.clone()))
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|u| u.username == username)
            .map(|u| u.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let mut users: Vec<User> = self.users.iter().map(|u| u.clone()).collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }

    async fn update(&self, user: User) -> DomainResult<()> {
        if !self.users.contains_key(&user.id) {
            return Err(DomainError::not_found("user", "id", user.id));
        }
        self.users.insert(user.id.clone(), user);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn room(number: &str) -> Room {
        Room {
            id: 0,
            number: number.into(),
            room_type: RoomType::Simple,
            capacity: 1,
            floor: 1,
            status: RoomStatus::Available,
            base_price: Decimal::from(50),
            notes: None,
            active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn room_ids_are_assigned_sequentially() {
        let store = InMemoryRepositoryProvider::new();
        let a = store.rooms().insert(room("101")).await.unwrap();
        let b = store.rooms().insert(room("102")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn duplicate_room_number_is_a_conflict() {
        let store = InMemoryRepositoryProvider::new();
        store.rooms().insert(room("101")).await.unwrap();
        let err = store.rooms().insert(room("101")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn tax_config_defaults_until_written() {
        let store = InMemoryRepositoryProvider::new();
        let cfg = store.tax_config().get().await.unwrap();
        assert_eq!(cfg.tax_rate_percent, Decimal::from(18));

        store
            .tax_config()
            .update(TaxConfig {
                tax_rate_percent: Decimal::from(10),
                ..Default::default()
            })
            .await
            .unwrap();
        let cfg = store.tax_config().get().await.unwrap();
        assert_eq!(cfg.tax_rate_percent, Decimal::from(10));
    }

    #[tokio::test]
    async fn find_overlapping_uses_half_open_ranges() {
        let store = InMemoryRepositoryProvider::new();
        let date = |d: u32| NaiveDate::from_ymd_opt(2025, 6, d).unwrap();
        store
            .reservations()
            .insert(Reservation::new(
                1,
                None,
                "Ana",
                date(10),
                date(12),
                Decimal::from(80),
                Decimal::ZERO,
            ))
            .await
            .unwrap();

        // Back-to-back booking touching only at the boundary does not overlap
        let hits = store
            .reservations()
            .find_overlapping(1, date(12), date(14))
            .await
            .unwrap();
        assert!(hits.is_empty());

        let hits = store
            .reservations()
            .find_overlapping(1, date(11), date(13))
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
    }
}
