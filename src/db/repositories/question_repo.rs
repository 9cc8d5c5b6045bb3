//! Question repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Question};

/// Repository for question database operations
pub struct QuestionRepository;

impl QuestionRepository {
    /// Create a new question
    pub async fn create(
        pool: &PgPool,
        topic_id: &Uuid,
        question_text: &str,
        options: &[String],
        question_type: &str,
        correct_answer: &str,
        created_by: &Uuid,
    ) -> AppResult<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (topic_id, question_text, options, question_type, correct_answer, created_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(topic_id)
        .bind(question_text)
        .bind(options)
        .bind(question_type)
        .bind(correct_answer)
        .bind(created_by)
        .fetch_one(pool)
        .await?;

        Ok(question)
    }

    /// List active questions for a topic
    pub async fn list_active_by_topic(pool: &PgPool, topic_id: &Uuid) -> AppResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT * FROM questions
            WHERE topic_id = $1 AND is_active = true
            ORDER BY created_at
            "#,
        )
        .bind(topic_id)
        .fetch_all(pool)
        .await?;

        Ok(questions)
    }

    /// Count active questions for a topic
    pub async fn count_active_by_topic(pool: &PgPool, topic_id: &Uuid) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM questions WHERE topic_id = $1 AND is_active = true"#,
        )
        .bind(topic_id)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }
}
