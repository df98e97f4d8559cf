pub mod auth;
pub mod guests;
pub mod health;
pub mod metrics;
pub mod payments;
pub mod pricing;
pub mod reports;
pub mod reservations;
pub mod rooms;
pub mod service_orders;
pub mod stays;
pub mod users;

use std::sync::Arc;

use crate::application::services::{
    GuestRegistry, Housekeeping, PaymentLedger, PricingEngine, Reporting, StayLifecycle,
};
use crate::domain::RepositoryProvider;

/// Shared state for all hotel-operations routes.
///
/// The services are thin and stateless; building them once here keeps
/// every handler to a single `State<ApiState>` extractor.
#[derive(Clone)]
pub struct ApiState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub registry: Arc<GuestRegistry>,
    pub pricing: Arc<PricingEngine>,
    pub lifecycle: Arc<StayLifecycle>,
    pub ledger: Arc<PaymentLedger>,
    pub housekeeping: Arc<Housekeeping>,
    pub reporting: Arc<Reporting>,
}

impl ApiState {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            registry: Arc::new(GuestRegistry::new(repos.clone())),
            pricing: Arc::new(PricingEngine::new(repos.clone())),
            lifecycle: Arc::new(StayLifecycle::new(repos.clone())),
            ledger: Arc::new(PaymentLedger::new(repos.clone())),
            housekeeping: Arc::new(Housekeeping::new(repos.clone())),
            reporting: Arc::new(Reporting::new(repos.clone())),
            repos,
        }
    }
}
