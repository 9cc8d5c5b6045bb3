//! Exam response DTOs

use serde::Serialize;
use uuid::Uuid;

/// A question as shown to an examinee; the correct answer stays on the server
#[derive(Debug, Serialize)]
pub struct ExamQuestion {
    pub id: Uuid,
    pub question_text: String,
    pub options: Vec<String>,
    pub question_type: String,
}

/// Exam start response
#[derive(Debug, Serialize)]
pub struct StartExamResponse {
    pub exam_session_id: Uuid,
    pub questions: Vec<ExamQuestion>,
    pub duration_minutes: u32,
    pub total_questions: usize,
}

/// Exam submission response
#[derive(Debug, Serialize)]
pub struct SubmitExamResponse {
    pub score: i32,
    pub total_questions: usize,
    pub percentage: f64,
    pub malpractice_detected: bool,
    pub message: String,
}
