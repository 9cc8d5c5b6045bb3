//! Certificate handler implementations

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::CertificateService,
    state::AppState,
};

use super::{request::PublishCertificateRequest, response::PublishCertificateResponse};

/// Generate and email a certificate for a score record (admin only).
///
/// Issuance is one-time: the score row's `certificate_issued` flag gates
/// duplicates with a 409.
pub async fn publish_certificate(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<PublishCertificateRequest>,
) -> AppResult<Json<PublishCertificateResponse>> {
    auth_user.require_admin()?;

    let response = CertificateService::publish(
        state.db(),
        state.config(),
        &auth_user.id,
        &payload.user_score_id,
    )
    .await?;

    Ok(Json(response))
}
