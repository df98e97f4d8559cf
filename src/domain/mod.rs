//! Core business entities, status machines and repository traits

pub mod error;
pub mod guest;
pub mod payment;
pub mod pricing;
pub mod repositories;
pub mod reservation;
pub mod room;
pub mod service_order;
pub mod stay;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use repositories::RepositoryProvider;
