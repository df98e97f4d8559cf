//! Report REST API handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{DemographicsReportDto, OccupancyReportDto, RevenueQuery, RevenueReportDto};
use crate::domain::DomainError;
use crate::interfaces::http::common::{domain_error, ApiResponse};
use crate::interfaces::http::modules::ApiState;

type HandlerError = (StatusCode, Json<ApiResponse<()>>);

#[utoipa::path(
    get,
    path = "/api/v1/reports/occupancy",
    tag = "Reports",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Occupancy snapshot", body = ApiResponse<OccupancyReportDto>)
    )
)]
pub async fn occupancy_report(
    State(state): State<ApiState>,
) -> Result<Json<ApiResponse<OccupancyReportDto>>, HandlerError> {
    let report = state.reporting.occupancy().await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(report.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/reports/revenue",
    tag = "Reports",
    security(("bearer_auth" = [])),
    params(RevenueQuery),
    responses(
        (status = 200, description = "Revenue over the range", body = ApiResponse<RevenueReportDto>),
        (status = 400, description = "Bad date range")
    )
)]
pub async fn revenue_report(
    State(state): State<ApiState>,
    Query(query): Query<RevenueQuery>,
) -> Result<Json<ApiResponse<RevenueReportDto>>, HandlerError> {
    if query.start_date > query.end_date {
        return Err(domain_error(DomainError::Validation(
            "start_date must not be after end_date".to_string(),
        )));
    }

    let report = state
        .reporting
        .revenue(query.start_date, query.end_date)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(report.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/reports/demographics",
    tag = "Reports",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Guest demographics", body = ApiResponse<DemographicsReportDto>)
    )
)]
pub async fn demographics_report(
    State(state): State<ApiState>,
) -> Result<Json<ApiResponse<DemographicsReportDto>>, HandlerError> {
    let report = state.reporting.demographics().await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(report.into())))
}
