//! Health module: liveness and database connectivity check

pub mod handlers;

pub use handlers::*;
