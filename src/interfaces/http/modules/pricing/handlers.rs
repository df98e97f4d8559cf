//! Pricing REST API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;

use super::dto::{
    CreateSeasonRequest, NightQuoteDto, QuoteQuery, QuoteRangeQuery, RangeQuoteDto, RateDto,
    SeasonDto, TaxConfigDto, UpdateSeasonRequest, UpdateTaxConfigRequest, UpsertRateRequest,
};
use crate::application::services::PriceSource;
use crate::domain::pricing::{Rate, Season, SeasonType, TaxConfig};
use crate::domain::room::RoomType;
use crate::domain::DomainError;
use crate::interfaces::http::common::{domain_error, ApiResponse, EmptyData, ValidatedJson};
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

fn resolve_source(
    room_id: Option<i32>,
    room_type: Option<&str>,
) -> Result<PriceSource, HandlerError> {
    match (room_id, room_type) {
        (Some(id), None) => Ok(PriceSource::Room(id)),
        (None, Some(t)) => Ok(PriceSource::RoomType(parse_room_type(t)?)),
        _ => Err(domain_error(DomainError::Validation(
            "Provide exactly one of room_id and room_type".to_string(),
        ))),
    }
}

// ── Seasons ────────────────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/api/v1/pricing/seasons",
    tag = "Pricing",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Season list", body = ApiResponse<Vec<SeasonDto>>)
    )
)]
pub async fn list_seasons(
    State(state): State<ApiState>,
) -> Result<Json<ApiResponse<Vec<SeasonDto>>>, HandlerError> {
    let seasons = state
        .repos
        .seasons()
        .find_all()
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(
        seasons.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/pricing/seasons",
    tag = "Pricing",
    security(("bearer_auth" = [])),
    request_body = CreateSeasonRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<SeasonDto>),
        (status = 400, description = "Invalid data")
    )
)]
pub async fn create_season(
    State(state): State<ApiState>,
    ValidatedJson(request): ValidatedJson<CreateSeasonRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SeasonDto>>), HandlerError> {
    if request.start_date > request.end_date {
        return Err(domain_error(DomainError::Validation(
            "start_date must not be after end_date".to_string(),
        )));
    }
    if request.multiplier <= Decimal::ZERO {
        return Err(domain_error(DomainError::Validation(
            "multiplier must be greater than zero".to_string(),
        )));
    }

    let season = Season {
        id: 0,
        name: request.name,
        start_date: request.start_date,
        end_date: request.end_date,
        season_type: SeasonType::from_str(&request.season_type),
        multiplier: request.multiplier,
        active: true,
    };
    let created = state
        .repos
        .seasons()
        .insert(season)
        .await
        .map_err(domain_error)?;

    info!(season_id = created.id, name = %created.name, "Season created");
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created.into()))))
}

#[utoipa::path(
    put,
    path = "/api/v1/pricing/seasons/{id}",
    tag = "Pricing",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Season ID")),
    request_body = UpdateSeasonRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<SeasonDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_season(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateSeasonRequest>,
) -> Result<Json<ApiResponse<SeasonDto>>, HandlerError> {
    let mut season = state
        .repos
        .seasons()
        .find_by_id(id)
        .await
        .map_err(domain_error)?
        .ok_or_else(|| domain_error(DomainError::not_found("Season", "id", id)))?;

    if let Some(name) = request.name {
        season.name = name;
    }
    if let Some(start_date) = request.start_date {
        season.start_date = start_date;
    }
    if let Some(end_date) = request.end_date {
        season.end_date = end_date;
    }
    if let Some(season_type) = request.season_type.as_deref() {
        season.season_type = SeasonType::from_str(season_type);
    }
    if let Some(multiplier) = request.multiplier {
        if multiplier <= Decimal::ZERO {
            return Err(domain_error(DomainError::Validation(
                "multiplier must be greater than zero".to_string(),
            )));
        }
        season.multiplier = multiplier;
    }
    if let Some(active) = request.active {
        season.active = active;
    }
    if season.start_date > season.end_date {
        return Err(domain_error(DomainError::Validation(
            "start_date must not be after end_date".to_string(),
        )));
    }

    state
        .repos
        .seasons()
        .update(season.clone())
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(season.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/pricing/seasons/{id}",
    tag = "Pricing",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Season ID")),
    responses(
        (status = 200, description = "Deactivated", body = ApiResponse<EmptyData>),
        (status = 404, description = "Not found")
    )
)]
pub async fn deactivate_season(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<EmptyData>>, HandlerError> {
    state
        .repos
        .seasons()
        .deactivate(id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(EmptyData {})))
}

// ── Rate cards ─────────────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/api/v1/pricing/rates",
    tag = "Pricing",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Rate cards", body = ApiResponse<Vec<RateDto>>)
    )
)]
pub async fn list_rates(
    State(state): State<ApiState>,
) -> Result<Json<ApiResponse<Vec<RateDto>>>, HandlerError> {
    let rates = state.repos.rates().find_all().await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(
        rates.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    put,
    path = "/api/v1/pricing/rates/{room_type}",
    tag = "Pricing",
    security(("bearer_auth" = [])),
    params(("room_type" = String, Path, description = "Room type")),
    request_body = UpsertRateRequest,
    responses(
        (status = 200, description = "Rate card stored", body = ApiResponse<RateDto>),
        (status = 400, description = "Unknown room type or bad price")
    )
)]
pub async fn upsert_rate(
    State(state): State<ApiState>,
    Path(room_type): Path<String>,
    ValidatedJson(request): ValidatedJson<UpsertRateRequest>,
) -> Result<Json<ApiResponse<RateDto>>, HandlerError> {
    let room_type = parse_room_type(&room_type)?;
    if request.base_price <= Decimal::ZERO {
        return Err(domain_error(DomainError::Validation(
            "base_price must be greater than zero".to_string(),
        )));
    }

    let rate = Rate {
        id: 0,
        room_type,
        base_price: request.base_price,
        weekend_price: request.weekend_price,
        low_price: request.low_price,
        mid_price: request.mid_price,
        high_price: request.high_price,
        updated_at: Utc::now(),
    };
    let stored = state
        .repos
        .rates()
        .upsert(rate)
        .await
        .map_err(domain_error)?;

    info!(room_type = %stored.room_type, "Rate card updated");
    Ok(Json(ApiResponse::success(stored.into())))
}

// ── Tax configuration ──────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/api/v1/pricing/tax-config",
    tag = "Pricing",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Tax configuration", body = ApiResponse<TaxConfigDto>)
    )
)]
pub async fn get_tax_config(
    State(state): State<ApiState>,
) -> Result<Json<ApiResponse<TaxConfigDto>>, HandlerError> {
    let config = state
        .repos
        .tax_config()
        .get()
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(config.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/pricing/tax-config",
    tag = "Pricing",
    security(("bearer_auth" = [])),
    request_body = UpdateTaxConfigRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<TaxConfigDto>),
        (status = 400, description = "Invalid rate")
    )
)]
pub async fn update_tax_config(
    State(state): State<ApiState>,
    ValidatedJson(request): ValidatedJson<UpdateTaxConfigRequest>,
) -> Result<Json<ApiResponse<TaxConfigDto>>, HandlerError> {
    if request.tax_rate_percent < Decimal::ZERO || request.tax_rate_percent > Decimal::from(100) {
        return Err(domain_error(DomainError::Validation(
            "tax_rate_percent must be between 0 and 100".to_string(),
        )));
    }

    let config = TaxConfig {
        tax_rate_percent: request.tax_rate_percent,
        exempt_zone: request.exempt_zone,
        exemption_law: request.exemption_law,
        updated_at: Utc::now(),
    };
    state
        .repos
        .tax_config()
        .update(config.clone())
        .await
        .map_err(domain_error)?;

    info!(rate = %config.tax_rate_percent, exempt = config.exempt_zone, "Tax configuration updated");
    Ok(Json(ApiResponse::success(config.into())))
}

// ── Quotes ─────────────────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/api/v1/pricing/quote",
    tag = "Pricing",
    security(("bearer_auth" = [])),
    params(QuoteQuery),
    responses(
        (status = 200, description = "Suggested nightly price", body = ApiResponse<NightQuoteDto>),
        (status = 400, description = "Bad source selector"),
        (status = 404, description = "Room or rate card not found")
    )
)]
pub async fn quote_night(
    State(state): State<ApiState>,
    Query(query): Query<QuoteQuery>,
) -> Result<Json<ApiResponse<NightQuoteDto>>, HandlerError> {
    let source = resolve_source(query.room_id, query.room_type.as_deref())?;
    let quote = state
        .pricing
        .quote_night(source, query.date)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(quote.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/pricing/quote-range",
    tag = "Pricing",
    security(("bearer_auth" = [])),
    params(QuoteRangeQuery),
    responses(
        (status = 200, description = "Per-night quotes and total", body = ApiResponse<RangeQuoteDto>),
        (status = 400, description = "Bad source selector or date range"),
        (status = 404, description = "Room or rate card not found")
    )
)]
pub async fn quote_range(
    State(state): State<ApiState>,
    Query(query): Query<QuoteRangeQuery>,
) -> Result<Json<ApiResponse<RangeQuoteDto>>, HandlerError> {
    if query.start_date >= query.end_date {
        return Err(domain_error(DomainError::Validation(
            "start_date must be before end_date".to_string(),
        )));
    }

    let source = resolve_source(query.room_id, query.room_type.as_deref())?;
    let quote = state
        .pricing
        .quote_range(source, query.start_date, query.end_date)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(quote.into())))
}
