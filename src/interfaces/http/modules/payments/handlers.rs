//! Payment REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{PaymentDto, PaymentOutcomeDto, RecordPaymentRequest, StayBalanceDto};
use crate::application::services::RecordPayment;
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};
use crate::interfaces::http::modules::ApiState;

type HandlerError = (StatusCode, Json<ApiResponse<()>>);

#[utoipa::path(
    post,
    path = "/api/v1/payments",
    tag = "Payments",
    security(("bearer_auth" = [])),
    request_body = RecordPaymentRequest,
    responses(
        (status = 201, description = "Payment recorded", body = ApiResponse<PaymentOutcomeDto>),
        (status = 400, description = "Invalid amount or method"),
        (status = 404, description = "Stay not found")
    )
)]
pub async fn record_payment(
    State(state): State<ApiState>,
    ValidatedJson(request): ValidatedJson<RecordPaymentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PaymentOutcomeDto>>), HandlerError> {
    let outcome = state
        .ledger
        .record_payment(RecordPayment {
            stay_id: request.stay_id,
            amount: request.amount,
            method: request.method,
            concept: request.concept,
            reference: request.reference,
        })
        .await
        .map_err(domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(outcome.into())),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/payments/{id}/void",
    tag = "Payments",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Payment voided", body = ApiResponse<PaymentDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Already voided")
    )
)]
pub async fn void_payment(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<PaymentDto>>, HandlerError> {
    let payment = state.ledger.void_payment(id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(payment.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/stays/{id}/payments",
    tag = "Payments",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Stay ID")),
    responses(
        (status = 200, description = "Ledger for the stay", body = ApiResponse<Vec<PaymentDto>>),
        (status = 404, description = "Stay not found")
    )
)]
pub async fn stay_payments(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<PaymentDto>>>, HandlerError> {
    let payments = state
        .ledger
        .payments_for_stay(id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(
        payments.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/stays/{id}/balance",
    tag = "Payments",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Stay ID")),
    responses(
        (status = 200, description = "Running balance", body = ApiResponse<StayBalanceDto>),
        (status = 404, description = "Stay not found")
    )
)]
pub async fn stay_balance(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<StayBalanceDto>>, HandlerError> {
    let balance = state
        .ledger
        .balance_for_stay(id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(balance.into())))
}
