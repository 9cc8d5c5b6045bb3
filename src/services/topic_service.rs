//! Topic service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::TopicRepository,
    error::{AppError, AppResult},
    handlers::topics::response::TopicResponse,
    utils::validation,
};

/// Topic service for business logic
pub struct TopicService;

impl TopicService {
    /// List all active topics with their question counts
    pub async fn list_topics(pool: &PgPool) -> AppResult<(Vec<TopicResponse>, i64)> {
        let topics = TopicRepository::list_active_with_counts(pool).await?;
        let total = topics.len() as i64;

        let topics = topics
            .into_iter()
            .map(|t| TopicResponse {
                id: t.id,
                name: t.name,
                is_active: t.is_active,
                question_count: t.question_count,
                created_at: t.created_at,
            })
            .collect();

        Ok((topics, total))
    }

    /// Create a new topic
    pub async fn create_topic(
        pool: &PgPool,
        creator_id: &Uuid,
        name: &str,
    ) -> AppResult<TopicResponse> {
        let name = validation::validate_topic_name(name)
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;

        let topic = TopicRepository::create(pool, &name, creator_id).await?;

        Ok(TopicResponse {
            id: topic.id,
            name: topic.name,
            is_active: topic.is_active,
            question_count: 0,
            created_at: topic.created_at,
        })
    }
}
