//! Service order REST API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CompleteServiceOrderRequest, CreateServiceOrderRequest, ListServiceOrdersQuery,
    ServiceOrderDto,
};
use crate::application::services::CreateOrder;
use crate::domain::service_order::{OrderPriority, OrderStatus, ServiceType};
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};
use crate::interfaces::http::modules::ApiState;

type HandlerError = (StatusCode, Json<ApiResponse<()>>);

#[utoipa::path(
    get,
    path = "/api/v1/service-orders",
    tag = "Service Orders",
    security(("bearer_auth" = [])),
    params(ListServiceOrdersQuery),
    responses(
        (status = 200, description = "Order list", body = ApiResponse<Vec<ServiceOrderDto>>)
    )
)]
pub async fn list_service_orders(
    State(state): State<ApiState>,
    Query(query): Query<ListServiceOrdersQuery>,
) -> Result<Json<ApiResponse<Vec<ServiceOrderDto>>>, HandlerError> {
    let status = query.status.as_deref().map(OrderStatus::from_str);
    let orders = state
        .housekeeping
        .list_orders(status)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(
        orders.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/service-orders/{id}",
    tag = "Service Orders",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Service order ID")),
    responses(
        (status = 200, description = "Order details", body = ApiResponse<ServiceOrderDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_service_order(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ServiceOrderDto>>, HandlerError> {
    let order = state.housekeeping.get_order(id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(order.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/service-orders",
    tag = "Service Orders",
    security(("bearer_auth" = [])),
    request_body = CreateServiceOrderRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<ServiceOrderDto>),
        (status = 404, description = "Room not found")
    )
)]
pub async fn create_service_order(
    State(state): State<ApiState>,
    ValidatedJson(request): ValidatedJson<CreateServiceOrderRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ServiceOrderDto>>), HandlerError> {
    let order = state
        .housekeeping
        .create_order(CreateOrder {
            room_id: request.room_id,
            service_type: ServiceType::from_str(&request.service_type),
            priority: request
                .priority
                .as_deref()
                .map(OrderPriority::from_str)
                .unwrap_or(OrderPriority::Normal),
            notes: request.notes,
        })
        .await
        .map_err(domain_error)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(order.into()))))
}

#[utoipa::path(
    put,
    path = "/api/v1/service-orders/{id}/complete",
    tag = "Service Orders",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Service order ID")),
    request_body = CompleteServiceOrderRequest,
    responses(
        (status = 200, description = "Completed", body = ApiResponse<ServiceOrderDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Already resolved")
    )
)]
pub async fn complete_service_order(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<CompleteServiceOrderRequest>,
) -> Result<Json<ApiResponse<ServiceOrderDto>>, HandlerError> {
    let order = state
        .housekeeping
        .complete_order(id, &request.resolved_by, request.notes)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(order.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/service-orders/{id}/cancel",
    tag = "Service Orders",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Service order ID")),
    responses(
        (status = 200, description = "Cancelled", body = ApiResponse<ServiceOrderDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Already resolved")
    )
)]
pub async fn cancel_service_order(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ServiceOrderDto>>, HandlerError> {
    let order = state
        .housekeeping
        .cancel_order(id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(order.into())))
}
