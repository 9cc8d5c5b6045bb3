//! User repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::roles,
    error::AppResult,
    models::{User, UserWithRole},
};

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    pub async fn create(
        pool: &PgPool,
        name: &str,
        email: &str,
        password_hash: &str,
        role_id: &Uuid,
        created_by: Option<&Uuid>,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash, role_id, created_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(role_id)
        .bind(created_by)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE email = $1"#)
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Find an active user joined with its role name (login path)
    pub async fn find_active_with_role_by_email(
        pool: &PgPool,
        email: &str,
    ) -> AppResult<Option<UserWithRole>> {
        let user = sqlx::query_as::<_, UserWithRole>(
            r#"
            SELECT u.id, u.name, u.email, u.password_hash, u.role_id,
                   r.name AS role_name, u.is_active, u.created_at, u.updated_at
            FROM users u
            JOIN roles r ON r.id = u.role_id
            WHERE u.email = $1 AND u.is_active = true
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Find an active user joined with its role name by ID (token paths)
    pub async fn find_active_with_role_by_id(
        pool: &PgPool,
        id: &Uuid,
    ) -> AppResult<Option<UserWithRole>> {
        let user = sqlx::query_as::<_, UserWithRole>(
            r#"
            SELECT u.id, u.name, u.email, u.password_hash, u.role_id,
                   r.name AS role_name, u.is_active, u.created_at, u.updated_at
            FROM users u
            JOIN roles r ON r.id = u.role_id
            WHERE u.id = $1 AND u.is_active = true
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// List all active users with role names
    pub async fn list_active(pool: &PgPool) -> AppResult<Vec<UserWithRole>> {
        let users = sqlx::query_as::<_, UserWithRole>(
            r#"
            SELECT u.id, u.name, u.email, u.password_hash, u.role_id,
                   r.name AS role_name, u.is_active, u.created_at, u.updated_at
            FROM users u
            JOIN roles r ON r.id = u.role_id
            WHERE u.is_active = true
            ORDER BY u.created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Update user name and/or email
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        name: Option<&str>,
        email: Option<&str>,
        updated_by: &Uuid,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                updated_by = $4,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(updated_by)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Soft-deactivate a user
    pub async fn deactivate(pool: &PgPool, id: &Uuid, updated_by: &Uuid) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET is_active = false, updated_by = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(updated_by)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Count active users holding the given role name
    pub async fn count_by_role(pool: &PgPool, role_name: &str) -> AppResult<i64> {
        debug_assert!(roles::ALL.contains(&role_name));

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM users u
            JOIN roles r ON r.id = u.role_id
            WHERE r.name = $1 AND u.is_active = true
            "#,
        )
        .bind(role_name)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }
}
