//! Payment aggregate: append-only ledger

pub mod model;
pub mod repository;

pub use model::{paid_sum, Payment, PaymentStatus};
pub use repository::PaymentRepository;
