//! Topic repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Topic, TopicWithCount},
};

/// Repository for topic database operations
pub struct TopicRepository;

impl TopicRepository {
    /// Create a new topic
    pub async fn create(pool: &PgPool, name: &str, created_by: &Uuid) -> AppResult<Topic> {
        let topic = sqlx::query_as::<_, Topic>(
            r#"
            INSERT INTO topics (name, created_by)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(created_by)
        .fetch_one(pool)
        .await?;

        Ok(topic)
    }

    /// Find an active topic by ID
    pub async fn find_active_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Topic>> {
        let topic =
            sqlx::query_as::<_, Topic>(r#"SELECT * FROM topics WHERE id = $1 AND is_active = true"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(topic)
    }

    /// List all active topics with their active-question counts
    pub async fn list_active_with_counts(pool: &PgPool) -> AppResult<Vec<TopicWithCount>> {
        let topics = sqlx::query_as::<_, TopicWithCount>(
            r#"
            SELECT t.id, t.name, t.is_active,
                   COUNT(q.id) FILTER (WHERE q.is_active) AS question_count,
                   t.created_at
            FROM topics t
            LEFT JOIN questions q ON q.topic_id = t.id
            WHERE t.is_active = true
            GROUP BY t.id
            ORDER BY t.created_at
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(topics)
    }

    /// Count active topics
    pub async fn count_active(pool: &PgPool) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM topics WHERE is_active = true"#)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }
}
