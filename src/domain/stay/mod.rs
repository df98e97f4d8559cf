//! Stay aggregate: the check-in/check-out core

pub mod model;
pub mod repository;

pub use model::{compute_totals, elapsed_nights, GuestStatus, Stay, StayStatus, StayTotals};
pub use repository::StayRepository;
