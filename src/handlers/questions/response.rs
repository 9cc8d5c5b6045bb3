//! Question response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Full question record, correct answer included (admin view only)
#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub id: Uuid,
    pub topic_id: Uuid,
    pub question_text: String,
    pub options: Vec<String>,
    pub question_type: String,
    pub correct_answer: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Question listing response
#[derive(Debug, Serialize)]
pub struct QuestionsListResponse {
    pub questions: Vec<QuestionResponse>,
    pub total: i64,
}
