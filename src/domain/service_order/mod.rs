//! Service order aggregate: the cleaning/maintenance queue

pub mod model;
pub mod repository;

pub use model::{OrderPriority, OrderStatus, ServiceOrder, ServiceType};
pub use repository::ServiceOrderRepository;
