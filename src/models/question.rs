//! Question model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Question database model
///
/// `correct_answer` never leaves the server on exam-facing endpoints; only
/// the admin question views serialize full rows.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub topic_id: Uuid,
    pub question_text: String,
    pub options: Vec<String>,
    pub question_type: String,
    pub correct_answer: String,
    pub is_active: bool,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
