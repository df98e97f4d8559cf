//! Service orders module: the cleaning and maintenance queue

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
