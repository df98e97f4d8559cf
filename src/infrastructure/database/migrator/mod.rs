//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_rooms;
mod m20250101_000002_create_guests;
mod m20250101_000003_create_reservations;
mod m20250101_000004_create_stays;
mod m20250101_000005_create_payments;
mod m20250101_000006_create_service_orders;
mod m20250101_000007_create_seasons;
mod m20250101_000008_create_rates;
mod m20250101_000009_create_tax_config;
mod m20250101_000010_create_users;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_rooms::Migration),
            Box::new(m20250101_000002_create_guests::Migration),
            Box::new(m20250101_000003_create_reservations::Migration),
            Box::new(m20250101_000004_create_stays::Migration),
            Box::new(m20250101_000005_create_payments::Migration),
            Box::new(m20250101_000006_create_service_orders::Migration),
            Box::new(m20250101_000007_create_seasons::Migration),
            Box::new(m20250101_000008_create_rates::Migration),
            Box::new(m20250101_000009_create_tax_config::Migration),
            Box::new(m20250101_000010_create_users::Migration),
        ]
    }
}
