//! Admin handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::AdminService,
    state::AppState,
};

use super::{
    request::{CreateUserRequest, UpdateUserRequest},
    response::{
        AdminUserResponse, DashboardStatsResponse, MessageResponse, ResultsListResponse,
        UsersListResponse,
    },
};

/// Dashboard statistics
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<DashboardStatsResponse>> {
    auth_user.require_admin()?;

    let stats = AdminService::dashboard_stats(state.db()).await?;
    Ok(Json(stats))
}

/// List all active users
pub async fn list_users(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<UsersListResponse>> {
    auth_user.require_admin()?;

    let (users, total) = AdminService::list_users(state.db()).await?;
    Ok(Json(UsersListResponse { users, total }))
}

/// Create a user or admin account
pub async fn create_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<AdminUserResponse>)> {
    auth_user.require_admin()?;
    payload.validate()?;

    let user = AdminService::create_user(state.db(), &auth_user.id, payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Update a user's name and/or email
pub async fn update_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<Json<AdminUserResponse>> {
    auth_user.require_admin()?;
    payload.validate()?;

    let user = AdminService::update_user(state.db(), &auth_user.id, &id, payload).await?;
    Ok(Json(user))
}

/// Deactivate a user
pub async fn deactivate_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    auth_user.require_admin()?;

    AdminService::deactivate_user(state.db(), &auth_user.id, &id).await?;

    Ok(Json(MessageResponse {
        message: "User deactivated successfully".to_string(),
    }))
}

/// All exam results
pub async fn list_results(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<ResultsListResponse>> {
    auth_user.require_admin()?;

    let (results, total) = AdminService::list_results(state.db()).await?;
    Ok(Json(ResultsListResponse { results, total }))
}

/// Exam results for one user
pub async fn get_user_results(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<ResultsListResponse>> {
    auth_user.require_admin()?;

    let (results, total) = AdminService::results_for_user(state.db(), &user_id).await?;
    Ok(Json(ResultsListResponse { results, total }))
}
