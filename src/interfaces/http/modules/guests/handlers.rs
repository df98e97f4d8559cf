//! Guest REST API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use super::dto::{GuestDto, ListGuestsQuery, SetFrequentRequest, UpsertGuestRequest};
use crate::application::services::UpsertGuest;
use crate::domain::DomainError;
use crate::interfaces::http::common::{domain_error, ApiResponse, PaginatedResponse, ValidatedJson};
use crate::interfaces::http::modules::ApiState;

type HandlerError = (StatusCode, Json<ApiResponse<()>>);

#[utoipa::path(
    get,
    path = "/api/v1/guests",
    tag = "Guests",
    security(("bearer_auth" = [])),
    params(ListGuestsQuery),
    responses(
        (status = 200, description = "Guest list", body = ApiResponse<PaginatedResponse<GuestDto>>)
    )
)]
pub async fn list_guests(
    State(state): State<ApiState>,
    Query(query): Query<ListGuestsQuery>,
) -> Result<Json<ApiResponse<PaginatedResponse<GuestDto>>>, HandlerError> {
    let guests = match query.q.as_deref() {
        Some(q) if !q.trim().is_empty() => state.repos.guests().search(q).await,
        _ => state.repos.guests().find_all().await,
    }
    .map_err(domain_error)?;

    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(50).clamp(1, 100);
    let total = guests.len() as u64;
    let items: Vec<GuestDto> = guests
        .into_iter()
        .skip(((page - 1) * limit) as usize)
        .take(limit as usize)
        .map(Into::into)
        .collect();

    Ok(Json(ApiResponse::success(PaginatedResponse::new(
        items, total, page, limit,
    ))))
}

#[utoipa::path(
    get,
    path = "/api/v1/guests/{id}",
    tag = "Guests",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Guest ID")),
    responses(
        (status = 200, description = "Guest details", body = ApiResponse<GuestDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_guest(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<GuestDto>>, HandlerError> {
    let guest = state
        .repos
        .guests()
        .find_by_id(id)
        .await
        .map_err(domain_error)?
        .ok_or_else(|| domain_error(DomainError::not_found("Guest", "id", id)))?;

    Ok(Json(ApiResponse::success(guest.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/guests",
    tag = "Guests",
    security(("bearer_auth" = [])),
    request_body = UpsertGuestRequest,
    responses(
        (status = 200, description = "Guest registered or refreshed", body = ApiResponse<GuestDto>),
        (status = 400, description = "Invalid data")
    )
)]
pub async fn upsert_guest(
    State(state): State<ApiState>,
    ValidatedJson(request): ValidatedJson<UpsertGuestRequest>,
) -> Result<Json<ApiResponse<GuestDto>>, HandlerError> {
    let guest = state
        .registry
        .upsert_guest(UpsertGuest {
            document_type: request.document_type,
            document_number: request.document_number,
            name: request.name,
            surname: request.surname,
            phone: request.phone,
            email: request.email,
            nationality: request.nationality,
        })
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(guest.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/guests/{id}/frequent",
    tag = "Guests",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Guest ID")),
    request_body = SetFrequentRequest,
    responses(
        (status = 200, description = "Flag updated", body = ApiResponse<GuestDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn set_frequent(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<SetFrequentRequest>,
) -> Result<Json<ApiResponse<GuestDto>>, HandlerError> {
    let mut guest = state
        .repos
        .guests()
        .find_by_id(id)
        .await
        .map_err(domain_error)?
        .ok_or_else(|| domain_error(DomainError::not_found("Guest", "id", id)))?;

    guest.frequent = request.frequent;
    guest.updated_at = Utc::now();
    state
        .repos
        .guests()
        .update(guest.clone())
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(guest.into())))
}
