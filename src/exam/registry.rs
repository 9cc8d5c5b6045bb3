//! In-memory exam session registry

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::utils::time::now_utc;

/// A live exam session.
///
/// Holds the answer key server-side between start and submit. The key maps
/// question id to the correct answer text.
#[derive(Debug, Clone)]
pub struct ExamSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub topic_id: Uuid,
    pub answer_key: HashMap<Uuid, String>,
    pub total_questions: usize,
    pub started_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl ExamSession {
    /// Create a session expiring after the given duration plus grace
    pub fn new(
        user_id: Uuid,
        topic_id: Uuid,
        answer_key: HashMap<Uuid, String>,
        duration_minutes: u32,
        grace_seconds: i64,
    ) -> Self {
        let started_at = now_utc();
        let total_questions = answer_key.len();

        Self {
            id: Uuid::new_v4(),
            user_id,
            topic_id,
            answer_key,
            total_questions,
            started_at,
            expires_at: started_at
                + Duration::minutes(i64::from(duration_minutes))
                + Duration::seconds(grace_seconds),
        }
    }

    /// Whether the submit window has closed
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Registry of active exam sessions.
///
/// Process-local by design: contents are lost on restart and no compensating
/// mechanism exists. Stale sessions are swept opportunistically whenever a
/// new exam starts.
#[derive(Debug, Default)]
pub struct ExamRegistry {
    sessions: RwLock<HashMap<Uuid, ExamSession>>,
}

impl ExamRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a session and return its id
    pub async fn insert(&self, session: ExamSession) -> Uuid {
        let id = session.id;
        self.sessions.write().await.insert(id, session);
        id
    }

    /// Remove and return a session; submit consumes it exactly once
    pub async fn take(&self, id: &Uuid) -> Option<ExamSession> {
        self.sessions.write().await.remove(id)
    }

    /// Drop sessions whose submit window has closed, returning how many
    pub async fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired_at(now));
        before - sessions.len()
    }

    /// Number of live sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_key(duration_minutes: u32) -> ExamSession {
        let mut key = HashMap::new();
        key.insert(Uuid::new_v4(), "var".to_string());
        key.insert(Uuid::new_v4(), "parseInt()".to_string());
        ExamSession::new(Uuid::new_v4(), Uuid::new_v4(), key, duration_minutes, 60)
    }

    #[tokio::test]
    async fn test_insert_and_take() {
        let registry = ExamRegistry::new();
        let session = session_with_key(45);
        let user_id = session.user_id;

        let id = registry.insert(session).await;
        assert_eq!(registry.len().await, 1);

        let taken = registry.take(&id).await.expect("session present");
        assert_eq!(taken.user_id, user_id);
        assert_eq!(taken.total_questions, 2);

        // Consumed exactly once
        assert!(registry.take(&id).await.is_none());
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_take_unknown_session() {
        let registry = ExamRegistry::new();
        assert!(registry.take(&Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_purge_expired() {
        let registry = ExamRegistry::new();
        let live = session_with_key(45);
        let mut stale = session_with_key(45);
        stale.expires_at = now_utc() - Duration::minutes(1);

        let live_id = registry.insert(live).await;
        let stale_id = registry.insert(stale).await;

        let purged = registry.purge_expired(now_utc()).await;
        assert_eq!(purged, 1);
        assert!(registry.take(&stale_id).await.is_none());
        assert!(registry.take(&live_id).await.is_some());
    }

    #[test]
    fn test_expiry_window() {
        let session = session_with_key(45);

        assert!(!session.is_expired_at(session.started_at));
        // Inside the window plus grace
        assert!(!session.is_expired_at(session.started_at + Duration::minutes(45)));
        // Past the grace period
        assert!(session.is_expired_at(session.started_at + Duration::minutes(47)));
    }
}
