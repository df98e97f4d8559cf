//! Room REST API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use rust_decimal::Decimal;

use super::dto::{
    CreateRoomRequest, ListRoomsQuery, RoomDto, UpdateRoomRequest, UpdateRoomStatusRequest,
};
use crate::domain::room::{Room, RoomStatus, RoomType};
use crate::domain::DomainError;
use crate::interfaces::http::common::{domain_error, ApiResponse, EmptyData, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::modules::ApiState;

type HandlerError = (StatusCode, Json<ApiResponse<()>>);

fn parse_room_type(s: &str) -> Result<RoomType, HandlerError> {
    RoomType::from_str(s).ok_or_else(|| {
        domain_error(DomainError::Validation(format!(
            "Unknown room type: {}",
            s
        )))
    })
}

#[utoipa::path(
    get,
    path = "/api/v1/rooms",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(ListRoomsQuery),
    responses(
        (status = 200, description = "Room list", body = ApiResponse<Vec<RoomDto>>)
    )
)]
pub async fn list_rooms(
    State(state): State<ApiState>,
    Query(query): Query<ListRoomsQuery>,
) -> Result<Json<ApiResponse<Vec<RoomDto>>>, HandlerError> {
    let rooms = match query.status.as_deref() {
        Some(status) => {
            state
                .repos
                .rooms()
                .find_by_status(RoomStatus::from_str(status))
                .await
        }
        None => state.repos.rooms().find_all(query.include_inactive).await,
    }
    .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(
        rooms.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/rooms/{id}",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room details", body = ApiResponse<RoomDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_room(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<RoomDto>>, HandlerError> {
    let room = state
        .repos
        .rooms()
        .find_by_id(id)
        .await
        .map_err(domain_error)?
        .ok_or_else(|| domain_error(DomainError::not_found("Room", "id", id)))?;

    Ok(Json(ApiResponse::success(room.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/rooms",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    request_body = CreateRoomRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<RoomDto>),
        (status = 400, description = "Invalid data"),
        (status = 409, description = "Room number already exists")
    )
)]
pub async fn create_room(
    State(state): State<ApiState>,
    ValidatedJson(request): ValidatedJson<CreateRoomRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RoomDto>>), HandlerError> {
    let room_type = parse_room_type(&request.room_type)?;
    if request.base_price < Decimal::ZERO {
        return Err(domain_error(DomainError::Validation(
            "Base price cannot be negative".to_string(),
        )));
    }

    let now = Utc::now();
    let room = Room {
        id: 0,
        number: request.number,
        room_type,
        capacity: request.capacity,
        floor: request.floor,
        status: RoomStatus::Available,
        base_price: request.base_price,
        notes: request.notes,
        active: true,
        created_at: now,
        updated_at: now,
    };

    let created = state.repos.rooms().insert(room).await.map_err(domain_error)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created.into()))))
}

#[utoipa::path(
    put,
    path = "/api/v1/rooms/{id}",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    request_body = UpdateRoomRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<RoomDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_room(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateRoomRequest>,
) -> Result<Json<ApiResponse<RoomDto>>, HandlerError> {
    let mut room = state
        .repos
        .rooms()
        .find_by_id(id)
        .await
        .map_err(domain_error)?
        .ok_or_else(|| domain_error(DomainError::not_found("Room", "id", id)))?;

    if let Some(room_type) = request.room_type.as_deref() {
        room.room_type = parse_room_type(room_type)?;
    }
    if let Some(capacity) = request.capacity {
        room.capacity = capacity;
    }
    if let Some(floor) = request.floor {
        room.floor = floor;
    }
    if let Some(base_price) = request.base_price {
        if base_price < Decimal::ZERO {
            return Err(domain_error(DomainError::Validation(
                "Base price cannot be negative".to_string(),
            )));
        }
        room.base_price = base_price;
    }
    if request.notes.is_some() {
        room.notes = request.notes;
    }
    room.updated_at = Utc::now();

    state
        .repos
        .rooms()
        .update(room.clone())
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(room.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/rooms/{id}/status",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    request_body = UpdateRoomStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<EmptyData>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_room_status(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateRoomStatusRequest>,
) -> Result<Json<ApiResponse<EmptyData>>, HandlerError> {
    state
        .repos
        .rooms()
        .set_status(id, RoomStatus::from_str(&request.status))
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(EmptyData {})))
}

#[utoipa::path(
    delete,
    path = "/api/v1/rooms/{id}",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Deactivated", body = ApiResponse<EmptyData>),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Not found")
    )
)]
pub async fn deactivate_room(
    State(state): State<ApiState>,
    user: axum::Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<EmptyData>>, HandlerError> {
    // Taking a room out of service is reserved for admins.
    if !user.is_admin() {
        return Err(domain_error(DomainError::Forbidden(
            "Admin role required".to_string(),
        )));
    }

    state
        .repos
        .rooms()
        .deactivate(id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(EmptyData {})))
}
