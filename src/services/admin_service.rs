//! Admin service
//!
//! Dashboard statistics, user management and exam results.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::roles,
    db::repositories::{RoleRepository, ScoreRepository, TopicRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::admin::{
        request::{CreateUserRequest, UpdateUserRequest},
        response::{AdminUserResponse, DashboardStatsResponse, ScoreResponse},
    },
    models::ScoreWithDetails,
    utils::{crypto, validation},
};

/// Admin service for business logic
pub struct AdminService;

impl AdminService {
    /// Dashboard statistics
    pub async fn dashboard_stats(pool: &PgPool) -> AppResult<DashboardStatsResponse> {
        let total_users = UserRepository::count_by_role(pool, roles::USER).await?;
        let total_admins = UserRepository::count_by_role(pool, roles::ADMIN).await?;
        let total_topics = TopicRepository::count_active(pool).await?;
        let total_exams_taken = ScoreRepository::count_active(pool).await?;

        Ok(DashboardStatsResponse {
            total_users,
            total_admins,
            total_topics,
            total_exams_taken,
        })
    }

    /// List all active users
    pub async fn list_users(pool: &PgPool) -> AppResult<(Vec<AdminUserResponse>, i64)> {
        let users = UserRepository::list_active(pool).await?;
        let total = users.len() as i64;

        let users = users
            .into_iter()
            .map(|u| AdminUserResponse {
                id: u.id,
                name: u.name,
                email: u.email,
                role: u.role_name,
                is_active: u.is_active,
                created_at: u.created_at,
            })
            .collect();

        Ok((users, total))
    }

    /// Create a user or admin account
    pub async fn create_user(
        pool: &PgPool,
        creator_id: &Uuid,
        payload: CreateUserRequest,
    ) -> AppResult<AdminUserResponse> {
        validation::validate_role(&payload.role)
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;
        validation::validate_password(&payload.password)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if UserRepository::find_by_email(pool, &payload.email).await?.is_some() {
            return Err(AppError::AlreadyExists("Email already registered".to_string()));
        }

        let role = RoleRepository::find_by_name(pool, &payload.role)
            .await?
            .ok_or_else(|| AppError::NotFound("Role not found".to_string()))?;

        let password_hash = crypto::hash_password(&payload.password)?;
        let user = UserRepository::create(
            pool,
            &payload.name,
            &payload.email,
            &password_hash,
            &role.id,
            Some(creator_id),
        )
        .await?;

        tracing::info!(user_id = %user.id, role = %role.name, "User account created");

        Ok(AdminUserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            role: role.name,
            is_active: user.is_active,
            created_at: user.created_at,
        })
    }

    /// Update a user's name and/or email
    pub async fn update_user(
        pool: &PgPool,
        updater_id: &Uuid,
        user_id: &Uuid,
        payload: UpdateUserRequest,
    ) -> AppResult<AdminUserResponse> {
        UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if let Some(email) = payload.email.as_deref() {
            if let Some(existing) = UserRepository::find_by_email(pool, email).await? {
                if existing.id != *user_id {
                    return Err(AppError::AlreadyExists("Email already in use".to_string()));
                }
            }
        }

        let updated = UserRepository::update(
            pool,
            user_id,
            payload.name.as_deref(),
            payload.email.as_deref(),
            updater_id,
        )
        .await?;

        let role = RoleRepository::find_by_id(pool, &updated.role_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Role not found".to_string()))?;

        Ok(AdminUserResponse {
            id: updated.id,
            name: updated.name,
            email: updated.email,
            role: role.name,
            is_active: updated.is_active,
            created_at: updated.created_at,
        })
    }

    /// Soft-deactivate a user
    pub async fn deactivate_user(
        pool: &PgPool,
        updater_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<()> {
        UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        UserRepository::deactivate(pool, user_id, updater_id).await?;

        tracing::info!(user_id = %user_id, "User account deactivated");
        Ok(())
    }

    /// All active exam results with user and topic details
    pub async fn list_results(pool: &PgPool) -> AppResult<(Vec<ScoreResponse>, i64)> {
        let rows = ScoreRepository::list_active_with_details(pool).await?;
        let total = rows.len() as i64;

        Ok((rows.into_iter().map(Self::to_score_response).collect(), total))
    }

    /// Exam results for one user
    pub async fn results_for_user(
        pool: &PgPool,
        user_id: &Uuid,
    ) -> AppResult<(Vec<ScoreResponse>, i64)> {
        let rows = ScoreRepository::list_active_by_user_with_details(pool, user_id).await?;
        let total = rows.len() as i64;

        Ok((rows.into_iter().map(Self::to_score_response).collect(), total))
    }

    fn to_score_response(row: ScoreWithDetails) -> ScoreResponse {
        ScoreResponse {
            id: row.id,
            score: row.score,
            certificate_issued: row.certificate_issued,
            created_at: row.created_at,
            user_id: row.user_id,
            topic_id: row.topic_id,
            user_name: row.user_name,
            topic_name: row.topic_name,
        }
    }
}
