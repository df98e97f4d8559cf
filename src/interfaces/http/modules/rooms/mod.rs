//! Rooms module: room inventory CRUD and status transitions

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
