//! Reports module: read-side rollups for the front desk and owners

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
