//! Authentication API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use super::dto::{ChangePasswordRequest, LoginRequest, LoginResponse, UserInfo};
use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::{hash_password, verify_password};
use crate::interfaces::http::common::{domain_error, ApiResponse, EmptyData, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

type HandlerError = (StatusCode, Json<ApiResponse<()>>);

/// Auth state
#[derive(Clone)]
pub struct AuthHandlerState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub jwt_config: JwtConfig,
}

fn invalid_credentials() -> HandlerError {
    (
        StatusCode::UNAUTHORIZED,
        Json(ApiResponse::error("Invalid credentials")),
    )
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, HandlerError> {
    let user = state
        .repos
        .users()
        .find_by_username(&request.username)
        .await
        .map_err(domain_error)?
        .ok_or_else(invalid_credentials)?;

    if !user.is_active {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Account is disabled")),
        ));
    }

    let password_valid = verify_password(&request.password, &user.password_hash).unwrap_or(false);
    if !password_valid {
        return Err(invalid_credentials());
    }

    let token = create_token(
        &user.id,
        &user.username,
        user.role.as_str(),
        &state.jwt_config,
    )
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        )
    })?;

    info!(username = %user.username, "User logged in");

    Ok(Json(ApiResponse::success(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: state.jwt_config.expiration_hours * 3600,
        user: user.into(),
    })))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user info", body = ApiResponse<UserInfo>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_current_user(
    State(state): State<AuthHandlerState>,
    user: Option<axum::Extension<AuthenticatedUser>>,
) -> Result<Json<ApiResponse<UserInfo>>, HandlerError> {
    let Some(user) = user else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Not authenticated")),
        ));
    };

    let db_user = state
        .repos
        .users()
        .find_by_id(&user.user_id)
        .await
        .map_err(domain_error)?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("User not found")),
            )
        })?;

    Ok(Json(ApiResponse::success(db_user.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/change-password",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = ApiResponse<EmptyData>),
        (status = 401, description = "Invalid current password")
    )
)]
pub async fn change_password(
    State(state): State<AuthHandlerState>,
    user: Option<axum::Extension<AuthenticatedUser>>,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<EmptyData>>, HandlerError> {
    let Some(user) = user else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Not authenticated")),
        ));
    };

    let mut db_user = state
        .repos
        .users()
        .find_by_id(&user.user_id)
        .await
        .map_err(domain_error)?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("User not found")),
            )
        })?;

    let password_valid =
        verify_password(&request.current_password, &db_user.password_hash).unwrap_or(false);
    if !password_valid {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Invalid current password")),
        ));
    }

    db_user.password_hash = hash_password(&request.new_password).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        )
    })?;
    state
        .repos
        .users()
        .update(db_user)
        .await
        .map_err(domain_error)?;

    info!(user_id = %user.user_id, "Password changed");
    Ok(Json(ApiResponse::success(EmptyData {})))
}
