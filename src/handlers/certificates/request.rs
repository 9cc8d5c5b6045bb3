//! Certificate request DTOs

use serde::Deserialize;
use uuid::Uuid;

/// Certificate publishing request
#[derive(Debug, Deserialize)]
pub struct PublishCertificateRequest {
    pub user_score_id: Uuid,
}
