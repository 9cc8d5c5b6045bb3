//! Certificate email delivery

use lettre::{
    message::{header::ContentType, Attachment, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::{
    config::SmtpConfig,
    error::{AppError, AppResult},
};

/// Name of the attachment as it appears in the recipient's mailbox
const ATTACHMENT_FILENAME: &str = "certificate.pdf";

/// Send a certificate to its recipient as a PDF attachment.
///
/// Returns `Ok(false)` without sending when SMTP is not configured, so a
/// development deployment can issue certificates without a mail relay.
pub async fn send_certificate(
    smtp: &SmtpConfig,
    recipient_email: &str,
    recipient_name: &str,
    topic_name: &str,
    pdf_bytes: Vec<u8>,
) -> AppResult<bool> {
    if !smtp.is_configured() {
        tracing::warn!(
            recipient = %recipient_email,
            "SMTP not configured; certificate generated but not emailed"
        );
        return Ok(false);
    }

    let message = build_message(smtp, recipient_email, recipient_name, topic_name, pdf_bytes)?;

    let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host)
        .map_err(|e| AppError::Smtp(e.to_string()))?
        .port(smtp.port)
        .credentials(Credentials::new(smtp.username.clone(), smtp.password.clone()))
        .build();

    mailer
        .send(message)
        .await
        .map_err(|e| AppError::Smtp(e.to_string()))?;

    tracing::info!(recipient = %recipient_email, topic = %topic_name, "Certificate emailed");
    Ok(true)
}

/// Assemble the multipart message: plain-text body plus the PDF attachment
fn build_message(
    smtp: &SmtpConfig,
    recipient_email: &str,
    recipient_name: &str,
    topic_name: &str,
    pdf_bytes: Vec<u8>,
) -> AppResult<Message> {
    let from: Mailbox = smtp
        .from_address
        .parse()
        .map_err(|_| AppError::Configuration(format!("invalid EMAIL_FROM address: {}", smtp.from_address)))?;
    let to: Mailbox = recipient_email
        .parse()
        .map_err(|_| AppError::Smtp(format!("invalid recipient address: {recipient_email}")))?;

    let body = format!(
        "Dear {recipient_name},\n\n\
         Congratulations on completing the {topic_name} quiz!\n\n\
         Please find your certificate attached to this email.\n\n\
         Best regards,\n\
         The QuizDeck Team\n"
    );

    let pdf_content_type = ContentType::parse("application/pdf")
        .map_err(|e| AppError::Smtp(e.to_string()))?;
    let attachment = Attachment::new(ATTACHMENT_FILENAME.to_string()).body(pdf_bytes, pdf_content_type);

    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(format!("Your Certificate for {topic_name} Quiz"))
        .multipart(
            MultiPart::mixed()
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body(body),
                )
                .singlepart(attachment),
        )
        .map_err(|e| AppError::Smtp(e.to_string()))?;

    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smtp_config() -> SmtpConfig {
        SmtpConfig {
            host: "smtp.example.com".to_string(),
            port: 587,
            username: "certs@example.com".to_string(),
            password: "app-password".to_string(),
            from_address: "QuizDeck <certs@example.com>".to_string(),
        }
    }

    #[test]
    fn test_build_message() {
        let message = build_message(
            &smtp_config(),
            "learner@example.com",
            "Test User",
            "JavaScript Basics",
            b"%PDF-1.3 fake".to_vec(),
        )
        .unwrap();

        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("Your Certificate for JavaScript Basics Quiz"));
        assert!(formatted.contains("certificate.pdf"));
    }

    #[test]
    fn test_build_message_rejects_bad_recipient() {
        let result = build_message(
            &smtp_config(),
            "not-an-address",
            "Test User",
            "JavaScript Basics",
            Vec::new(),
        );

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_send_skipped_when_unconfigured() {
        let mut smtp = smtp_config();
        smtp.username = String::new();
        smtp.password = String::new();

        let sent = send_certificate(&smtp, "learner@example.com", "Test User", "Topic", Vec::new())
            .await
            .unwrap();

        assert!(!sent);
    }
}
