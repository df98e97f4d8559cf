//! Pricing module: seasons, rate cards, tax configuration and quotes

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
