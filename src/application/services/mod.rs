pub mod guest_registry;
pub mod housekeeping;
pub mod payment_ledger;
pub mod pricing;
pub mod reporting;
pub mod stay_lifecycle;

pub use guest_registry::{GuestRegistry, UpsertGuest};
pub use housekeeping::{CreateOrder, Housekeeping};
pub use payment_ledger::{PaymentLedger, PaymentOutcome, RecordPayment, StayBalance};
pub use pricing::{NightQuote, PriceSource, PricingEngine, RangeQuote};
pub use reporting::{DemographicsReport, OccupancyReport, Reporting, RevenueReport};
pub use stay_lifecycle::{
    CheckInInput, CheckInOutcome, CheckOutInput, CheckOutOutcome, CheckOutSummary, StayLifecycle,
};
