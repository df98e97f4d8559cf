//! Reservations module: future room holds with overlap protection

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
