//! Payments module: append-only ledger and per-stay balances

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
