//! Certificate response DTOs

use serde::Serialize;

/// Certificate publishing response
#[derive(Debug, Serialize)]
pub struct PublishCertificateResponse {
    pub message: String,
    pub user_email: String,
}
