//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod guest_repository;
pub mod payment_repository;
pub mod pricing_repository;
pub mod repository_provider;
pub mod reservation_repository;
pub mod room_repository;
pub mod service_order_repository;
pub mod stay_repository;
pub mod user_repository;

pub use repository_provider::SeaOrmRepositoryProvider;
