//! Database entities module

pub mod guest;
pub mod payment;
pub mod rate;
pub mod reservation;
pub mod room;
pub mod season;
pub mod service_order;
pub mod stay;
pub mod tax_config;
pub mod user;

pub use guest::Entity as Guest;
pub use payment::Entity as Payment;
pub use rate::Entity as Rate;
pub use reservation::Entity as Reservation;
pub use room::Entity as Room;
pub use season::Entity as Season;
pub use service_order::Entity as ServiceOrder;
pub use stay::Entity as Stay;
pub use tax_config::Entity as TaxConfig;
pub use user::Entity as User;
