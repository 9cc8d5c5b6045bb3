//! Role repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Role};

/// Repository for role database operations
pub struct RoleRepository;

impl RoleRepository {
    /// Find role by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Role>> {
        let role = sqlx::query_as::<_, Role>(r#"SELECT * FROM roles WHERE id = $1 AND is_active = true"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(role)
    }

    /// Find role by name
    pub async fn find_by_name(pool: &PgPool, name: &str) -> AppResult<Option<Role>> {
        let role = sqlx::query_as::<_, Role>(r#"SELECT * FROM roles WHERE name = $1 AND is_active = true"#)
            .bind(name)
            .fetch_optional(pool)
            .await?;

        Ok(role)
    }
}
