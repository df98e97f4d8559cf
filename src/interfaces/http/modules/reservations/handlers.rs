//! Reservation REST API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use tracing::info;

use super::dto::{CreateReservationRequest, ListReservationsQuery, ReservationDto};
use crate::domain::reservation::{Reservation, ReservationStatus};
use crate::domain::DomainError;
use crate::interfaces::http::common::{domain_error, ApiResponse, EmptyData, ValidatedJson};
use crate::interfaces::http::modules::ApiState;

type HandlerError = (StatusCode, Json<ApiResponse<()>>);

#[utoipa::path(
    get,
    path = "/api/v1/reservations",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    params(ListReservationsQuery),
    responses(
        (status = 200, description = "Reservation list", body = ApiResponse<Vec<ReservationDto>>)
    )
)]
pub async fn list_reservations(
    State(state): State<ApiState>,
    Query(query): Query<ListReservationsQuery>,
) -> Result<Json<ApiResponse<Vec<ReservationDto>>>, HandlerError> {
    let status = query.status.as_deref().map(ReservationStatus::from_str);
    let reservations = state
        .repos
        .reservations()
        .find_all(status)
        .await
        .map_err(domain_error)?;

    // Date filters use the same half-open window as the stay itself.
    let filtered: Vec<ReservationDto> = reservations
        .into_iter()
        .filter(|r| query.from.is_none_or(|from| r.end_date > from))
        .filter(|r| query.to.is_none_or(|to| r.start_date < to))
        .map(Into::into)
        .collect();

    Ok(Json(ApiResponse::success(filtered)))
}

#[utoipa::path(
    get,
    path = "/api/v1/reservations/{id}",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation details", body = ApiResponse<ReservationDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_reservation(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ReservationDto>>, HandlerError> {
    let reservation = state
        .repos
        .reservations()
        .find_by_id(id)
        .await
        .map_err(domain_error)?
        .ok_or_else(|| domain_error(DomainError::not_found("Reservation", "id", id)))?;

    Ok(Json(ApiResponse::success(reservation.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/reservations",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<ReservationDto>),
        (status = 400, description = "Invalid date range"),
        (status = 404, description = "Room not found"),
        (status = 409, description = "Dates overlap an open reservation")
    )
)]
pub async fn create_reservation(
    State(state): State<ApiState>,
    ValidatedJson(request): ValidatedJson<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ReservationDto>>), HandlerError> {
    if request.start_date >= request.end_date {
        return Err(domain_error(DomainError::Validation(
            "start_date must be before end_date".to_string(),
        )));
    }
    if request.advance_payment < Decimal::ZERO {
        return Err(domain_error(DomainError::Validation(
            "advance_payment cannot be negative".to_string(),
        )));
    }

    let room = state
        .repos
        .rooms()
        .find_by_id(request.room_id)
        .await
        .map_err(domain_error)?
        .ok_or_else(|| domain_error(DomainError::not_found("Room", "id", request.room_id)))?;

    if !room.active {
        return Err(domain_error(DomainError::Validation(format!(
            "Room {} is no longer in service",
            room.number
        ))));
    }

    // Half-open ranges: back-to-back bookings sharing a boundary date do not clash.
    let overlapping = state
        .repos
        .reservations()
        .find_overlapping(request.room_id, request.start_date, request.end_date)
        .await
        .map_err(domain_error)?;
    if !overlapping.is_empty() {
        return Err(domain_error(DomainError::Conflict(format!(
            "Room {} already has a reservation in that date range",
            room.number
        ))));
    }

    let nightly_price = request.nightly_price.unwrap_or(room.base_price);
    if nightly_price <= Decimal::ZERO {
        return Err(domain_error(DomainError::Validation(
            "nightly_price must be greater than zero".to_string(),
        )));
    }

    let mut reservation = Reservation::new(
        request.room_id,
        request.guest_id,
        request.client_name,
        request.start_date,
        request.end_date,
        nightly_price,
        request.advance_payment,
    );
    reservation.notes = request.notes;

    let created = state
        .repos
        .reservations()
        .insert(reservation)
        .await
        .map_err(domain_error)?;

    info!(
        reservation_id = created.id,
        room_id = created.room_id,
        "Reservation created"
    );
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created.into()))))
}

async fn transition(
    state: &ApiState,
    id: i32,
    target: ReservationStatus,
) -> Result<Json<ApiResponse<EmptyData>>, HandlerError> {
    let reservation = state
        .repos
        .reservations()
        .find_by_id(id)
        .await
        .map_err(domain_error)?
        .ok_or_else(|| domain_error(DomainError::not_found("Reservation", "id", id)))?;

    // Only open reservations can still move; checked-in and terminal ones are frozen.
    if !reservation.is_open() {
        return Err(domain_error(DomainError::Conflict(format!(
            "Reservation {} is already {}",
            id, reservation.status
        ))));
    }

    state
        .repos
        .reservations()
        .set_status(id, target)
        .await
        .map_err(domain_error)?;

    info!(reservation_id = id, status = %target, "Reservation status changed");
    Ok(Json(ApiResponse::success(EmptyData {})))
}

#[utoipa::path(
    put,
    path = "/api/v1/reservations/{id}/confirm",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Confirmed", body = ApiResponse<EmptyData>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Not in an open state")
    )
)]
pub async fn confirm_reservation(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<EmptyData>>, HandlerError> {
    transition(&state, id, ReservationStatus::Confirmed).await
}

#[utoipa::path(
    put,
    path = "/api/v1/reservations/{id}/cancel",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Cancelled", body = ApiResponse<EmptyData>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Not in an open state")
    )
)]
pub async fn cancel_reservation(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<EmptyData>>, HandlerError> {
    transition(&state, id, ReservationStatus::Cancelled).await
}

#[utoipa::path(
    put,
    path = "/api/v1/reservations/{id}/no-show",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Marked as no-show", body = ApiResponse<EmptyData>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Not in an open state")
    )
)]
pub async fn no_show_reservation(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<EmptyData>>, HandlerError> {
    transition(&state, id, ReservationStatus::NoShow).await
}
