//! Stays module: check-in, check-out and in-house tracking

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
