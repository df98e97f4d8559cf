//! User management API handlers
//!
//! Admin-only CRUD endpoints for staff accounts.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use tracing::info;

use super::dto::{CreateUserRequest, UpdateUserRequest, UserDto};
use crate::domain::user::{User, UserRole};
use crate::domain::DomainError;
use crate::infrastructure::crypto::password::hash_password;
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};
use crate::interfaces::http::modules::auth::AuthHandlerState;

type HandlerError = (StatusCode, Json<ApiResponse<()>>);

#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User list", body = ApiResponse<Vec<UserDto>>),
        (status = 403, description = "Admin only")
    )
)]
pub async fn list_users(
    State(state): State<AuthHandlerState>,
) -> Result<Json<ApiResponse<Vec<UserDto>>>, HandlerError> {
    let users = state.repos.users().find_all().await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(
        users.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_user(
    State(state): State<AuthHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<UserDto>>, HandlerError> {
    let user = state
        .repos
        .users()
        .find_by_id(&id)
        .await
        .map_err(domain_error)?
        .ok_or_else(|| domain_error(DomainError::not_found("User", "id", &id)))?;

    Ok(Json(ApiResponse::success(user.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<UserDto>),
        (status = 409, description = "Username already exists")
    )
)]
pub async fn create_user(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserDto>>), HandlerError> {
    let password_hash = hash_password(&request.password).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        )
    })?;

    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        username: request.username,
        password_hash,
        full_name: request.full_name,
        role: UserRole::from_str(&request.role),
        is_active: true,
        created_at: Utc::now(),
    };
    let created = state.repos.users().insert(user).await.map_err(domain_error)?;

    info!(username = %created.username, role = %created.role, "User created");
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created.into()))))
}

#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<UserDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_user(
    State(state): State<AuthHandlerState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserDto>>, HandlerError> {
    let mut user = state
        .repos
        .users()
        .find_by_id(&id)
        .await
        .map_err(domain_error)?
        .ok_or_else(|| domain_error(DomainError::not_found("User", "id", &id)))?;

    if let Some(full_name) = request.full_name {
        user.full_name = full_name;
    }
    if let Some(role) = request.role.as_deref() {
        user.role = UserRole::from_str(role);
    }
    if let Some(is_active) = request.is_active {
        user.is_active = is_active;
    }

    state
        .repos
        .users()
        .update(user.clone())
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(user.into())))
}
