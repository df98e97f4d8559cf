//! Stay REST API handlers: the check-in / check-out workflow

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;

use super::dto::{
    CheckInRequest, CheckInResponse, CheckOutRequest, CheckOutResponse, ListStaysQuery,
    StayDetailDto, StayDto, UpdateGuestStatusRequest,
};
use crate::application::services::{CheckInInput, CheckOutInput};
use crate::domain::stay::{GuestStatus, StayStatus};
use crate::domain::DomainError;
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};
use crate::interfaces::http::modules::ApiState;

type HandlerError = (StatusCode, Json<ApiResponse<()>>);

#[utoipa::path(
    get,
    path = "/api/v1/stays",
    tag = "Stays",
    security(("bearer_auth" = [])),
    params(ListStaysQuery),
    responses(
        (status = 200, description = "Stay list", body = ApiResponse<Vec<StayDto>>)
    )
)]
pub async fn list_stays(
    State(state): State<ApiState>,
    Query(query): Query<ListStaysQuery>,
) -> Result<Json<ApiResponse<Vec<StayDto>>>, HandlerError> {
    let stays = state
        .repos
        .stays()
        .find_all(query.active)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(
        stays.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/stays/{id}",
    tag = "Stays",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Stay ID")),
    responses(
        (status = 200, description = "Stay details", body = ApiResponse<StayDetailDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_stay(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<StayDetailDto>>, HandlerError> {
    let stay = state
        .repos
        .stays()
        .find_by_id(id)
        .await
        .map_err(domain_error)?
        .ok_or_else(|| domain_error(DomainError::not_found("Stay", "id", id)))?;

    let guest_name = state
        .repos
        .guests()
        .find_by_id(stay.guest_id)
        .await
        .map_err(domain_error)?
        .map(|g| g.full_name())
        .unwrap_or_default();
    let room_number = state
        .repos
        .rooms()
        .find_by_id(stay.room_id)
        .await
        .map_err(domain_error)?
        .map(|r| r.number)
        .unwrap_or_default();

    Ok(Json(ApiResponse::success(StayDetailDto {
        stay: stay.into(),
        guest_name,
        room_number,
    })))
}

#[utoipa::path(
    post,
    path = "/api/v1/stays/check-in",
    tag = "Stays",
    security(("bearer_auth" = [])),
    request_body = CheckInRequest,
    responses(
        (status = 201, description = "Checked in", body = ApiResponse<CheckInResponse>),
        (status = 400, description = "Invalid data"),
        (status = 404, description = "Room not found"),
        (status = 409, description = "Room unavailable or already occupied")
    )
)]
pub async fn check_in(
    State(state): State<ApiState>,
    ValidatedJson(request): ValidatedJson<CheckInRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CheckInResponse>>), HandlerError> {
    if request.nightly_price <= Decimal::ZERO {
        return Err(domain_error(DomainError::Validation(
            "nightly_price must be greater than zero".to_string(),
        )));
    }

    let outcome = state
        .lifecycle
        .check_in(CheckInInput {
            document_type: request.document_type,
            document_number: request.document_number,
            guest_name: request.guest_name,
            guest_surname: request.guest_surname,
            guest_phone: request.guest_phone,
            guest_email: request.guest_email,
            guest_nationality: request.guest_nationality,
            room_id: request.room_id,
            reservation_id: request.reservation_id,
            expected_checkout_date: request.expected_checkout_date,
            nightly_price: request.nightly_price,
            nights: request.nights,
            adults: request.adults,
            children: request.children,
            notes: request.notes,
        })
        .await
        .map_err(domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(outcome.into())),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/stays/{id}/check-out",
    tag = "Stays",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Stay ID")),
    request_body = CheckOutRequest,
    responses(
        (status = 200, description = "Checked out", body = ApiResponse<CheckOutResponse>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Already checked out")
    )
)]
pub async fn check_out(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<CheckOutRequest>,
) -> Result<Json<ApiResponse<CheckOutResponse>>, HandlerError> {
    if request.additional_charges < Decimal::ZERO {
        return Err(domain_error(DomainError::Validation(
            "additional_charges cannot be negative".to_string(),
        )));
    }

    let outcome = state
        .lifecycle
        .check_out(
            id,
            CheckOutInput {
                notes: request.notes,
                additional_charges: request.additional_charges,
            },
        )
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(outcome.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/stays/{id}/guest-status",
    tag = "Stays",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Stay ID")),
    request_body = UpdateGuestStatusRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<StayDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Stay already checked out")
    )
)]
pub async fn update_guest_status(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateGuestStatusRequest>,
) -> Result<Json<ApiResponse<StayDto>>, HandlerError> {
    let mut stay = state
        .repos
        .stays()
        .find_by_id(id)
        .await
        .map_err(domain_error)?
        .ok_or_else(|| domain_error(DomainError::not_found("Stay", "id", id)))?;

    if stay.status == StayStatus::Checkout {
        return Err(domain_error(DomainError::Conflict(format!(
            "Stay {} is already checked out",
            id
        ))));
    }

    let status = GuestStatus::from_str(&request.guest_status);
    if status == GuestStatus::Checkout {
        return Err(domain_error(DomainError::Validation(
            "Use the check-out endpoint to close a stay".to_string(),
        )));
    }

    stay.guest_status = status;
    state
        .repos
        .stays()
        .update(stay.clone())
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(stay.into())))
}
