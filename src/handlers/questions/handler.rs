//! Question handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::QuestionService,
    state::AppState,
};

use super::{
    request::CreateQuestionRequest,
    response::{QuestionResponse, QuestionsListResponse},
};

/// Create a new question (admin only)
pub async fn create_question(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateQuestionRequest>,
) -> AppResult<(StatusCode, Json<QuestionResponse>)> {
    auth_user.require_admin()?;
    payload.validate()?;

    let question = QuestionService::create_question(state.db(), &auth_user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(question)))
}

/// List all questions for a topic, correct answers included (admin only)
pub async fn list_questions_by_topic(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(topic_id): Path<Uuid>,
) -> AppResult<Json<QuestionsListResponse>> {
    auth_user.require_admin()?;

    let (questions, total) = QuestionService::list_by_topic(state.db(), &topic_id).await?;

    Ok(Json(QuestionsListResponse { questions, total }))
}
