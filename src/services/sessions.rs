use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::core::{Consultation, ConsultationError};

/// Errors that can occur with consultation sessions
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Consultation not found: {0}")]
    NotFound(Uuid),

    #[error(transparent)]
    Consultation(#[from] ConsultationError),
}

/// In-memory store of running consultations
///
/// Sessions live in a bounded moka cache and expire after a period without
/// answers. Each session sits behind its own mutex so concurrent answers to
/// the same consultation are applied one at a time.
#[derive(Clone)]
pub struct ConsultationStore {
    sessions: moka::future::Cache<Uuid, Arc<Mutex<Consultation>>>,
}

impl ConsultationStore {
    /// Create a new store
    pub fn new(max_sessions: u64, idle_ttl_secs: u64) -> Self {
        let sessions = moka::future::CacheBuilder::new(max_sessions)
            .time_to_idle(Duration::from_secs(idle_ttl_secs))
            .build();

        Self { sessions }
    }

    /// Open a new consultation
    pub async fn start(&self) -> (Uuid, Consultation) {
        let id = Uuid::new_v4();
        let consultation = Consultation::new();
        self.sessions
            .insert(id, Arc::new(Mutex::new(consultation.clone())))
            .await;

        tracing::debug!("Started consultation {}", id);
        (id, consultation)
    }

    /// Current state of a consultation
    pub async fn get(&self, id: Uuid) -> Result<Consultation, SessionError> {
        let session = self.session(id).await?;
        let consultation = session.lock().await;
        Ok(consultation.clone())
    }

    /// Apply an answer (or a skip) to the current question
    pub async fn answer(
        &self,
        id: Uuid,
        answer: Option<String>,
    ) -> Result<Consultation, SessionError> {
        let session = self.session(id).await?;
        let mut consultation = session.lock().await;
        consultation.answer(answer)?;

        tracing::trace!("Consultation {} answered, finished: {}", id, consultation.is_finished());
        Ok(consultation.clone())
    }

    /// Drop a consultation
    pub async fn remove(&self, id: Uuid) {
        self.sessions.invalidate(&id).await;
    }

    /// Get store statistics
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            active_sessions: self.sessions.entry_count(),
        }
    }

    async fn session(&self, id: Uuid) -> Result<Arc<Mutex<Consultation>>, SessionError> {
        self.sessions.get(&id).await.ok_or(SessionError::NotFound(id))
    }
}

/// Session store statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    pub active_sessions: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_start_and_answer() {
        let store = ConsultationStore::new(100, 60);
        let (id, consultation) = store.start().await;
        assert!(!consultation.is_finished());

        let updated = store.answer(id, Some("Белое".to_string())).await.unwrap();
        assert_eq!(updated.preferences().wine_color.as_deref(), Some("Белое"));

        let fetched = store.get(id).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let store = ConsultationStore::new(100, 60);
        let result = store.get(Uuid::new_v4()).await;
        assert!(matches!(result, Err(SessionError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_finished_session_rejects_answers() {
        let store = ConsultationStore::new(100, 60);
        let (id, _) = store.start().await;
        for _ in 0..5 {
            store.answer(id, None).await.unwrap();
        }

        let result = store.answer(id, Some("Мясо".to_string())).await;
        assert!(matches!(
            result,
            Err(SessionError::Consultation(ConsultationError::AlreadyFinished))
        ));
    }

    #[tokio::test]
    async fn test_remove() {
        let store = ConsultationStore::new(100, 60);
        let (id, _) = store.start().await;
        store.remove(id).await;
        assert!(store.get(id).await.is_err());
    }
}
