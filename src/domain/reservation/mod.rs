//! Reservation aggregate: entity, status lifecycle, repository interface

pub mod model;
pub mod repository;

pub use model::{nights_between, Reservation, ReservationStatus};
pub use repository::ReservationRepository;
