//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::middleware::{auth_middleware, require_admin, AuthState};
use crate::interfaces::http::modules::{
    auth, guests, health, metrics, payments, pricing, reports, reservations, rooms,
    service_orders, stays, users, ApiState,
};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Auth
        auth::login,
        auth::get_current_user,
        auth::change_password,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        // Rooms
        rooms::list_rooms,
        rooms::get_room,
        rooms::create_room,
        rooms::update_room,
        rooms::update_room_status,
        rooms::deactivate_room,
        // Guests
        guests::list_guests,
        guests::get_guest,
        guests::upsert_guest,
        guests::set_frequent,
        // Reservations
        reservations::list_reservations,
        reservations::get_reservation,
        reservations::create_reservation,
        reservations::confirm_reservation,
        reservations::cancel_reservation,
        reservations::no_show_reservation,
        // Stays
        stays::list_stays,
        stays::get_stay,
        stays::check_in,
        stays::check_out,
        stays::update_guest_status,
        // Payments
        payments::record_payment,
        payments::void_payment,
        payments::stay_payments,
        payments::stay_balance,
        // Service orders
        service_orders::list_service_orders,
        service_orders::get_service_order,
        service_orders::create_service_order,
        service_orders::complete_service_order,
        service_orders::cancel_service_order,
        // Pricing
        pricing::list_seasons,
        pricing::create_season,
        pricing::update_season,
        pricing::deactivate_season,
        pricing::list_rates,
        pricing::upsert_rate,
        pricing::get_tax_config,
        pricing::update_tax_config,
        pricing::quote_night,
        pricing::quote_range,
        // Reports
        reports::occupancy_report,
        reports::revenue_report,
        reports::demographics_report,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,

            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::UserInfo,
            auth::ChangePasswordRequest,
            // Users
            users::UserDto,
            users::CreateUserRequest,
            users::UpdateUserRequest,
            // Rooms
            rooms::RoomDto,
            rooms::CreateRoomRequest,
            rooms::UpdateRoomRequest,
            rooms::UpdateRoomStatusRequest,
            // Guests
            guests::GuestDto,
            guests::UpsertGuestRequest,
            guests::SetFrequentRequest,
            // Reservations
            reservations::ReservationDto,
            reservations::CreateReservationRequest,
            // Stays
            stays::StayDto,
            stays::StayDetailDto,
            stays::CheckInRequest,
            stays::CheckInResponse,
            stays::CheckOutRequest,
            stays::CheckOutResponse,
            stays::CheckOutSummaryDto,
            stays::UpdateGuestStatusRequest,
            // Payments
            payments::PaymentDto,
            payments::RecordPaymentRequest,
            payments::PaymentOutcomeDto,
            payments::StayBalanceDto,
            // Service orders
            service_orders::ServiceOrderDto,
            service_orders::CreateServiceOrderRequest,
            service_orders::CompleteServiceOrderRequest,
            // Pricing
            pricing::SeasonDto,
            pricing::CreateSeasonRequest,
            pricing::UpdateSeasonRequest,
            pricing::RateDto,
            pricing::UpsertRateRequest,
            pricing::TaxConfigDto,
            pricing::UpdateTaxConfigRequest,
            pricing::NightQuoteDto,
            pricing::RangeQuoteDto,
            // Reports
            reports::OccupancyReportDto,
            reports::RevenueReportDto,
            reports::DayRevenueDto,
            reports::MethodRevenueDto,
            reports::DemographicsReportDto,
            reports::NationalityCountDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Authentication", description = "Staff login (JWT) and password change"),
        (name = "Users", description = "Staff account management (admin only)"),
        (name = "Rooms", description = "Room inventory and status"),
        (name = "Guests", description = "Guest registry keyed on identity documents"),
        (name = "Reservations", description = "Future room holds with overlap protection"),
        (name = "Stays", description = "Check-in / check-out workflow"),
        (name = "Payments", description = "Append-only payment ledger and balances"),
        (name = "Service Orders", description = "Cleaning and maintenance queue"),
        (name = "Pricing", description = "Seasons, rate cards, tax configuration and quotes"),
        (name = "Reports", description = "Occupancy, revenue and demographics rollups"),
    ),
    info(
        title = "Hostal PMS API",
        version = "1.0.0",
        description = "REST API for small-hotel front-desk operations",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    db: DatabaseConnection,
    jwt_config: JwtConfig,
    prometheus_handle: PrometheusHandle,
) -> Router {
    let middleware_state = AuthState {
        jwt_config: jwt_config.clone(),
    };

    let api_state = ApiState::new(repos.clone());

    let auth_state = auth::AuthHandlerState {
        repos,
        jwt_config,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Auth routes (public)
    let auth_routes = Router::new()
        .route("/login", post(auth::login))
        .with_state(auth_state.clone());

    // Auth routes (protected)
    let auth_protected_routes = Router::new()
        .route("/me", get(auth::get_current_user))
        .route("/change-password", post(auth::change_password))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(auth_state.clone());

    // User routes (admin only)
    let user_routes = Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route("/{id}", get(users::get_user).put(users::update_user))
        .layer(middleware::from_fn(require_admin))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(auth_state);

    // Room routes (protected); deactivation checks the admin role itself
    let room_routes = Router::new()
        .route("/", get(rooms::list_rooms).post(rooms::create_room))
        .route(
            "/{id}",
            get(rooms::get_room)
                .put(rooms::update_room)
                .delete(rooms::deactivate_room),
        )
        .route("/{id}/status", put(rooms::update_room_status))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(api_state.clone());

    // Guest routes (protected)
    let guest_routes = Router::new()
        .route("/", get(guests::list_guests).post(guests::upsert_guest))
        .route("/{id}", get(guests::get_guest))
        .route("/{id}/frequent", put(guests::set_frequent))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(api_state.clone());

    // Reservation routes (protected)
    let reservation_routes = Router::new()
        .route(
            "/",
            get(reservations::list_reservations).post(reservations::create_reservation),
        )
        .route("/{id}", get(reservations::get_reservation))
        .route("/{id}/confirm", put(reservations::confirm_reservation))
        .route("/{id}/cancel", put(reservations::cancel_reservation))
        .route("/{id}/no-show", put(reservations::no_show_reservation))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(api_state.clone());

    // Stay routes, including the per-stay ledger views (protected)
    let stay_routes = Router::new()
        .route("/", get(stays::list_stays))
        .route("/check-in", post(stays::check_in))
        .route("/{id}", get(stays::get_stay))
        .route("/{id}/check-out", post(stays::check_out))
        .route("/{id}/guest-status", put(stays::update_guest_status))
        .route("/{id}/payments", get(payments::stay_payments))
        .route("/{id}/balance", get(payments::stay_balance))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(api_state.clone());

    // Payment routes (protected)
    let payment_routes = Router::new()
        .route("/", post(payments::record_payment))
        .route("/{id}/void", put(payments::void_payment))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(api_state.clone());

    // Service order routes (protected)
    let service_order_routes = Router::new()
        .route(
            "/",
            get(service_orders::list_service_orders).post(service_orders::create_service_order),
        )
        .route("/{id}", get(service_orders::get_service_order))
        .route("/{id}/complete", put(service_orders::complete_service_order))
        .route("/{id}/cancel", put(service_orders::cancel_service_order))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(api_state.clone());

    // Pricing routes (protected)
    let pricing_routes = Router::new()
        .route(
            "/seasons",
            get(pricing::list_seasons).post(pricing::create_season),
        )
        .route(
            "/seasons/{id}",
            put(pricing::update_season).delete(pricing::deactivate_season),
        )
        .route("/rates", get(pricing::list_rates))
        .route("/rates/{room_type}", put(pricing::upsert_rate))
        .route(
            "/tax-config",
            get(pricing::get_tax_config).put(pricing::update_tax_config),
        )
        .route("/quote", get(pricing::quote_night))
        .route("/quote-range", get(pricing::quote_range))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(api_state.clone());

    // Report routes (protected)
    let report_routes = Router::new()
        .route("/occupancy", get(reports::occupancy_report))
        .route("/revenue", get(reports::revenue_report))
        .route("/demographics", get(reports::demographics_report))
        .layer(middleware::from_fn_with_state(
            middleware_state,
            auth_middleware,
        ))
        .with_state(api_state);

    let health_state = health::HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };

    let metrics_state = metrics::MetricsState {
        handle: prometheus_handle,
    };

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health and metrics (public)
        .route(
            "/health",
            get(health::health_check).with_state(health_state),
        )
        .route(
            "/metrics",
            get(metrics::prometheus_metrics).with_state(metrics_state),
        )
        // Auth
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1/auth", auth_protected_routes)
        // Users
        .nest("/api/v1/users", user_routes)
        // Rooms
        .nest("/api/v1/rooms", room_routes)
        // Guests
        .nest("/api/v1/guests", guest_routes)
        // Reservations
        .nest("/api/v1/reservations", reservation_routes)
        // Stays
        .nest("/api/v1/stays", stay_routes)
        // Payments
        .nest("/api/v1/payments", payment_routes)
        // Service orders
        .nest("/api/v1/service-orders", service_order_routes)
        // Pricing
        .nest("/api/v1/pricing", pricing_routes)
        // Reports
        .nest("/api/v1/reports", report_routes)
        // Middleware
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
