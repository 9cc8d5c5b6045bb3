//! Question request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::MAX_QUESTION_TEXT_LENGTH;

/// Question creation request
///
/// Option-set and correct-answer consistency is checked in the service;
/// the derive only covers shape.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    pub topic_id: Uuid,

    #[validate(length(min = 1, max = MAX_QUESTION_TEXT_LENGTH))]
    pub question_text: String,

    #[validate(length(min = 2))]
    pub options: Vec<String>,

    #[validate(length(min = 1))]
    pub question_type: String,

    #[validate(length(min = 1))]
    pub correct_answer: String,
}
