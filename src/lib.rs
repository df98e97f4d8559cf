//! # Hostal PMS
//!
//! Property-management system for a small hotel: rooms, guests,
//! reservations, stays, payments, housekeeping and pricing.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, status machines and repository traits
//! - **application**: Services orchestrating the front-desk workflows
//! - **infrastructure**: SeaORM persistence, in-memory storage, crypto
//! - **interfaces**: REST API with Swagger documentation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{
    init_database, DatabaseConfig, InMemoryRepositoryProvider, Migrator, SeaOrmRepositoryProvider,
};

// Re-export API router
pub use interfaces::http::create_api_router;
