//! Topic response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Topic with its active-question count
#[derive(Debug, Serialize)]
pub struct TopicResponse {
    pub id: Uuid,
    pub name: String,
    pub is_active: bool,
    pub question_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Topic listing response
#[derive(Debug, Serialize)]
pub struct TopicsListResponse {
    pub topics: Vec<TopicResponse>,
    pub total: i64,
}
