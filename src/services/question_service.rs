//! Question service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{QuestionRepository, TopicRepository},
    error::{AppError, AppResult},
    handlers::questions::{request::CreateQuestionRequest, response::QuestionResponse},
    models::Question,
    utils::validation,
};

/// Question service for business logic
pub struct QuestionService;

impl QuestionService {
    /// Create a new question under an active topic
    pub async fn create_question(
        pool: &PgPool,
        creator_id: &Uuid,
        payload: CreateQuestionRequest,
    ) -> AppResult<QuestionResponse> {
        validation::validate_question_type(&payload.question_type)
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;
        validation::validate_options(&payload.options, &payload.correct_answer)
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;

        let question_text = validation::sanitize_string(&payload.question_text);
        if question_text.is_empty() {
            return Err(AppError::InvalidInput("Question text cannot be empty".to_string()));
        }

        TopicRepository::find_active_by_id(pool, &payload.topic_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Topic not found".to_string()))?;

        let question = QuestionRepository::create(
            pool,
            &payload.topic_id,
            &question_text,
            &payload.options,
            &payload.question_type,
            &payload.correct_answer,
            creator_id,
        )
        .await?;

        Ok(Self::to_response(question))
    }

    /// List a topic's active questions, correct answers included (admin view)
    pub async fn list_by_topic(
        pool: &PgPool,
        topic_id: &Uuid,
    ) -> AppResult<(Vec<QuestionResponse>, i64)> {
        TopicRepository::find_active_by_id(pool, topic_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Topic not found".to_string()))?;

        let questions = QuestionRepository::list_active_by_topic(pool, topic_id).await?;
        let total = questions.len() as i64;

        Ok((questions.into_iter().map(Self::to_response).collect(), total))
    }

    fn to_response(question: Question) -> QuestionResponse {
        QuestionResponse {
            id: question.id,
            topic_id: question.topic_id,
            question_text: question.question_text,
            options: question.options,
            question_type: question.question_type,
            correct_answer: question.correct_answer,
            is_active: question.is_active,
            created_at: question.created_at,
        }
    }
}
