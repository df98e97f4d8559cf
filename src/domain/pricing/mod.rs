//! Pricing aggregate: seasons, rate cards, tax configuration

pub mod model;
pub mod repository;

pub use model::{Rate, Season, SeasonType, TaxConfig};
pub use repository::{RateRepository, SeasonRepository, TaxConfigRepository};
