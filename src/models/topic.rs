//! Topic model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Topic database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Topic {
    pub id: Uuid,
    pub name: String,
    pub is_active: bool,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Topic row with its active-question count (listing endpoint)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TopicWithCount {
    pub id: Uuid,
    pub name: String,
    pub is_active: bool,
    pub question_count: i64,
    pub created_at: DateTime<Utc>,
}
