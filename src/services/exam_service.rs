//! Exam service
//!
//! Orchestrates the start/submit flow around the in-memory session registry:
//! start loads the topic's questions and parks the answer key server-side,
//! submit consumes the session, scores the answers and persists the result.

use std::collections::HashMap;

use sqlx::PgPool;

use crate::{
    config::ExamConfig,
    constants::EXAM_SUBMIT_GRACE_SECONDS,
    db::repositories::{QuestionRepository, ScoreRepository, TopicRepository},
    error::{AppError, AppResult},
    exam::{registry::ExamSession, scoring, ExamRegistry},
    handlers::exams::{
        request::{StartExamRequest, SubmitExamRequest},
        response::{ExamQuestion, StartExamResponse, SubmitExamResponse},
    },
    middleware::auth::AuthenticatedUser,
    utils::time::now_utc,
};

/// Completion message on a clean submit
const COMPLETED_MESSAGE: &str = "Quiz completed. Certificate will be emailed shortly.";

/// Completion message when the tab-switch threshold was hit
const MALPRACTICE_MESSAGE: &str =
    "Exam auto-submitted due to malpractice detection. Certificate will be emailed shortly.";

/// Exam service for business logic
pub struct ExamService;

impl ExamService {
    /// Start an exam for a topic.
    ///
    /// One attempt per topic: an existing active score row blocks a new
    /// session. The created session holds the correct answers server-side;
    /// the response carries the questions without them.
    pub async fn start_exam(
        pool: &PgPool,
        registry: &ExamRegistry,
        exam_config: &ExamConfig,
        user: &AuthenticatedUser,
        payload: StartExamRequest,
    ) -> AppResult<StartExamResponse> {
        // Sweep sessions whose submit window has long closed; cheap enough
        // to do inline since starts are rare.
        let purged = registry.purge_expired(now_utc()).await;
        if purged > 0 {
            tracing::debug!(purged, "Dropped expired exam sessions");
        }

        if ScoreRepository::find_active_by_user_and_topic(pool, &user.id, &payload.topic_id)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(
                "You have already completed this exam".to_string(),
            ));
        }

        let topic = TopicRepository::find_active_by_id(pool, &payload.topic_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Topic not found".to_string()))?;

        let questions = QuestionRepository::list_active_by_topic(pool, &topic.id).await?;
        if questions.is_empty() {
            return Err(AppError::InvalidInput(
                "No questions available for this topic".to_string(),
            ));
        }

        let answer_key: HashMap<_, _> = questions
            .iter()
            .map(|q| (q.id, q.correct_answer.clone()))
            .collect();

        let session = ExamSession::new(
            user.id,
            topic.id,
            answer_key,
            exam_config.duration_minutes,
            EXAM_SUBMIT_GRACE_SECONDS,
        );
        let total_questions = session.total_questions;
        let exam_session_id = registry.insert(session).await;

        tracing::info!(
            user_id = %user.id,
            topic_id = %topic.id,
            session_id = %exam_session_id,
            total_questions,
            "Exam started"
        );

        let questions = questions
            .into_iter()
            .map(|q| ExamQuestion {
                id: q.id,
                question_text: q.question_text,
                options: q.options,
                question_type: q.question_type,
            })
            .collect();

        Ok(StartExamResponse {
            exam_session_id,
            questions,
            duration_minutes: exam_config.duration_minutes,
            total_questions,
        })
    }

    /// Submit exam answers.
    ///
    /// Consumes the session: it must exist, belong to the caller and match
    /// the submitted topic. A session past its window is discarded and the
    /// submit refused. Malpractice flags the submission without altering
    /// the score.
    pub async fn submit_exam(
        pool: &PgPool,
        registry: &ExamRegistry,
        exam_config: &ExamConfig,
        user: &AuthenticatedUser,
        payload: SubmitExamRequest,
    ) -> AppResult<SubmitExamResponse> {
        let session = registry
            .take(&payload.exam_session_id)
            .await
            .ok_or_else(|| AppError::NotFound("Exam session not found".to_string()))?;

        if session.user_id != user.id {
            // Not re-inserted; a hijack attempt burns the session
            return Err(AppError::Forbidden("Exam session belongs to another user".to_string()));
        }
        if session.topic_id != payload.topic_id {
            return Err(AppError::InvalidInput(
                "Submitted topic does not match the exam session".to_string(),
            ));
        }
        if session.is_expired_at(now_utc()) {
            return Err(AppError::SessionExpired);
        }

        let malpractice_detected = payload.tab_switch_count >= exam_config.max_tab_switches;

        let answers: Vec<_> = payload
            .answers
            .into_iter()
            .map(|a| (a.question_id, a.selected_answer))
            .collect();
        let score = scoring::tally(&session.answer_key, &answers);
        let total_questions = session.total_questions;
        let percentage = scoring::percentage(score, total_questions);

        ScoreRepository::create(pool, &user.id, &session.topic_id, score).await?;

        tracing::info!(
            user_id = %user.id,
            topic_id = %session.topic_id,
            score,
            total_questions,
            malpractice_detected,
            "Exam submitted"
        );

        let message = if malpractice_detected {
            MALPRACTICE_MESSAGE
        } else {
            COMPLETED_MESSAGE
        };

        Ok(SubmitExamResponse {
            score,
            total_questions,
            percentage,
            malpractice_detected,
            message: message.to_string(),
        })
    }
}
