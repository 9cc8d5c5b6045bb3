//! Exam handler implementations

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::ExamService,
    state::AppState,
};

use super::{
    request::{StartExamRequest, SubmitExamRequest},
    response::{StartExamResponse, SubmitExamResponse},
};

/// Start an exam for a topic (regular users only)
pub async fn start_exam(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<StartExamRequest>,
) -> AppResult<Json<StartExamResponse>> {
    auth_user.require_examinee()?;

    let response = ExamService::start_exam(
        state.db(),
        state.exams(),
        &state.config().exam,
        &auth_user,
        payload,
    )
    .await?;

    Ok(Json(response))
}

/// Submit exam answers (regular users only)
pub async fn submit_exam(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<SubmitExamRequest>,
) -> AppResult<Json<SubmitExamResponse>> {
    auth_user.require_examinee()?;

    let response = ExamService::submit_exam(
        state.db(),
        state.exams(),
        &state.config().exam,
        &auth_user,
        payload,
    )
    .await?;

    Ok(Json(response))
}
