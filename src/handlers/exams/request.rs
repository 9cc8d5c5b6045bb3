//! Exam request DTOs

use serde::Deserialize;
use uuid::Uuid;

/// Exam start request
#[derive(Debug, Deserialize)]
pub struct StartExamRequest {
    pub topic_id: Uuid,
}

/// A single submitted answer
#[derive(Debug, Deserialize)]
pub struct AnswerSubmission {
    pub question_id: Uuid,
    pub selected_answer: String,
}

/// Exam submission request
#[derive(Debug, Deserialize)]
pub struct SubmitExamRequest {
    pub exam_session_id: Uuid,
    pub topic_id: Uuid,
    pub answers: Vec<AnswerSubmission>,
    /// Client-reported tab-switch counter for malpractice detection
    pub tab_switch_count: u32,
}
