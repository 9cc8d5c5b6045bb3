//! Topic handler implementations

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::TopicService,
    state::AppState,
};

use super::{
    request::CreateTopicRequest,
    response::{TopicResponse, TopicsListResponse},
};

/// List all active topics with question counts (any authenticated user)
pub async fn list_topics(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
) -> AppResult<Json<TopicsListResponse>> {
    let (topics, total) = TopicService::list_topics(state.db()).await?;

    Ok(Json(TopicsListResponse { topics, total }))
}

/// Create a new topic (admin only)
pub async fn create_topic(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateTopicRequest>,
) -> AppResult<(StatusCode, Json<TopicResponse>)> {
    auth_user.require_admin()?;
    payload.validate()?;

    let topic = TopicService::create_topic(state.db(), &auth_user.id, &payload.name).await?;

    Ok((StatusCode::CREATED, Json(topic)))
}
