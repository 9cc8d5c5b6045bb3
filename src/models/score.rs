//! User score model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Exam score database model
///
/// `certificate_issued` gates one-time certificate issuance.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UserScore {
    pub id: Uuid,
    pub user_id: Uuid,
    pub topic_id: Uuid,
    pub score: i32,
    pub certificate_issued: bool,
    pub is_active: bool,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Score row joined with user and topic details (admin results, certificates)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ScoreWithDetails {
    pub id: Uuid,
    pub user_id: Uuid,
    pub topic_id: Uuid,
    pub score: i32,
    pub certificate_issued: bool,
    pub created_at: DateTime<Utc>,
    pub user_name: String,
    pub user_email: String,
    pub topic_name: String,
}
