//! Room aggregate: entity, status state machine, repository interface

pub mod model;
pub mod repository;

pub use model::{Room, RoomStatus, RoomType};
pub use repository::RoomRepository;
