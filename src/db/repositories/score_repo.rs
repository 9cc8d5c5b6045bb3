//! Score repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{ScoreWithDetails, UserScore},
};

/// Repository for exam score database operations
pub struct ScoreRepository;

impl ScoreRepository {
    /// Record an exam score
    pub async fn create(
        pool: &PgPool,
        user_id: &Uuid,
        topic_id: &Uuid,
        score: i32,
    ) -> AppResult<UserScore> {
        let row = sqlx::query_as::<_, UserScore>(
            r#"
            INSERT INTO user_scores (user_id, topic_id, score, created_by)
            VALUES ($1, $2, $3, $1)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(topic_id)
        .bind(score)
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    /// Find the active score for a (user, topic) pair
    pub async fn find_active_by_user_and_topic(
        pool: &PgPool,
        user_id: &Uuid,
        topic_id: &Uuid,
    ) -> AppResult<Option<UserScore>> {
        let row = sqlx::query_as::<_, UserScore>(
            r#"
            SELECT * FROM user_scores
            WHERE user_id = $1 AND topic_id = $2 AND is_active = true
            "#,
        )
        .bind(user_id)
        .bind(topic_id)
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }

    /// Find an active score row joined with user and topic details
    pub async fn find_active_with_details(
        pool: &PgPool,
        id: &Uuid,
    ) -> AppResult<Option<ScoreWithDetails>> {
        let row = sqlx::query_as::<_, ScoreWithDetails>(
            r#"
            SELECT s.id, s.user_id, s.topic_id, s.score, s.certificate_issued, s.created_at,
                   u.name AS user_name, u.email AS user_email, t.name AS topic_name
            FROM user_scores s
            JOIN users u ON u.id = s.user_id
            JOIN topics t ON t.id = s.topic_id
            WHERE s.id = $1 AND s.is_active = true
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }

    /// List all active scores with user and topic details
    pub async fn list_active_with_details(pool: &PgPool) -> AppResult<Vec<ScoreWithDetails>> {
        let rows = sqlx::query_as::<_, ScoreWithDetails>(
            r#"
            SELECT s.id, s.user_id, s.topic_id, s.score, s.certificate_issued, s.created_at,
                   u.name AS user_name, u.email AS user_email, t.name AS topic_name
            FROM user_scores s
            JOIN users u ON u.id = s.user_id
            JOIN topics t ON t.id = s.topic_id
            WHERE s.is_active = true
            ORDER BY s.created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// List active scores for one user with user and topic details
    pub async fn list_active_by_user_with_details(
        pool: &PgPool,
        user_id: &Uuid,
    ) -> AppResult<Vec<ScoreWithDetails>> {
        let rows = sqlx::query_as::<_, ScoreWithDetails>(
            r#"
            SELECT s.id, s.user_id, s.topic_id, s.score, s.certificate_issued, s.created_at,
                   u.name AS user_name, u.email AS user_email, t.name AS topic_name
            FROM user_scores s
            JOIN users u ON u.id = s.user_id
            JOIN topics t ON t.id = s.topic_id
            WHERE s.user_id = $1 AND s.is_active = true
            ORDER BY s.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Flip the one-time certificate issuance flag
    pub async fn mark_certificate_issued(
        pool: &PgPool,
        id: &Uuid,
        updated_by: &Uuid,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE user_scores
            SET certificate_issued = true, updated_by = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(updated_by)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Count active score rows (exams taken)
    pub async fn count_active(pool: &PgPool) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM user_scores WHERE is_active = true"#)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }
}
