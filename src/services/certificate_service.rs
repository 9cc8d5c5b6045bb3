//! Certificate service
//!
//! One-time issuance: render the PDF, email it, then flip the score row's
//! `certificate_issued` flag. Everything runs synchronously within the
//! publishing request.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    certificate::{email, pdf, Grade},
    config::Config,
    db::repositories::{QuestionRepository, ScoreRepository},
    error::{AppError, AppResult},
    exam::scoring,
    handlers::certificates::response::PublishCertificateResponse,
    utils::{crypto, time::now_utc},
};

/// Certificate service for business logic
pub struct CertificateService;

impl CertificateService {
    /// Generate and email the certificate for a score row
    pub async fn publish(
        pool: &PgPool,
        config: &Config,
        issuer_id: &Uuid,
        user_score_id: &Uuid,
    ) -> AppResult<PublishCertificateResponse> {
        let score = ScoreRepository::find_active_with_details(pool, user_score_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Score record not found".to_string()))?;

        if score.certificate_issued {
            return Err(AppError::Conflict("Certificate already issued".to_string()));
        }

        // Grade against the topic's current active-question count
        let total_questions =
            QuestionRepository::count_active_by_topic(pool, &score.topic_id).await?;
        let percentage = scoring::percentage(score.score, total_questions.max(0) as usize);
        let grade = Grade::from_percentage(percentage);

        let data = pdf::CertificateData {
            recipient_name: score.user_name.clone(),
            topic_name: score.topic_name.clone(),
            score: score.score,
            total_questions,
            grade,
            serial: crypto::generate_certificate_serial(),
            issued_at: now_utc(),
        };

        let pdf_path = pdf::render_to_dir(&config.certificate.output_dir, &data)?;

        let pdf_bytes = tokio::fs::read(&pdf_path)
            .await
            .map_err(|e| AppError::Pdf(format!("cannot read rendered certificate: {e}")))?;

        let sent = email::send_certificate(
            &config.smtp,
            &score.user_email,
            &score.user_name,
            &score.topic_name,
            pdf_bytes,
        )
        .await?;

        ScoreRepository::mark_certificate_issued(pool, &score.id, issuer_id).await?;

        tracing::info!(
            user_score_id = %score.id,
            recipient = %score.user_email,
            grade = %grade,
            sent,
            "Certificate issued"
        );

        let message = if sent {
            "Certificate generated and sent successfully".to_string()
        } else {
            "Certificate generated; email delivery is disabled".to_string()
        };

        Ok(PublishCertificateResponse {
            message,
            user_email: score.user_email,
        })
    }
}
