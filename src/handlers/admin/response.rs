//! Admin response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Dashboard statistics
#[derive(Debug, Serialize)]
pub struct DashboardStatsResponse {
    pub total_users: i64,
    pub total_admins: i64,
    pub total_topics: i64,
    pub total_exams_taken: i64,
}

/// User record in admin listings
#[derive(Debug, Serialize)]
pub struct AdminUserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// User listing response
#[derive(Debug, Serialize)]
pub struct UsersListResponse {
    pub users: Vec<AdminUserResponse>,
    pub total: i64,
}

/// Exam result with user and topic details
#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub id: Uuid,
    pub score: i32,
    pub certificate_issued: bool,
    pub created_at: DateTime<Utc>,
    pub user_id: Uuid,
    pub topic_id: Uuid,
    pub user_name: String,
    pub topic_name: String,
}

/// Results listing response
#[derive(Debug, Serialize)]
pub struct ResultsListResponse {
    pub results: Vec<ScoreResponse>,
    pub total: i64,
}

/// Generic confirmation message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
