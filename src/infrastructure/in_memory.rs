use crate::domain::form::FormData;
use crate::domain::ports::{SessionStore, SubmissionSink};
use crate::domain::state::WizardState;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store of wizard sessions.
///
/// Uses `Arc<RwLock<HashMap<String, WizardState>>>`; clones share the same map.
#[derive(Default, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, WizardState>>>,
}

impl InMemorySessionStore {
    /// Creates a new, empty in-memory session store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn store(&self, session: &str, state: WizardState) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.to_string(), state);
        Ok(())
    }

    async fn get(&self, session: &str) -> Result<Option<WizardState>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(session).cloned())
    }

    async fn get_all(&self) -> Result<Vec<(String, WizardState)>> {
        let sessions = self.sessions.read().await;
        Ok(sessions
            .iter()
            .map(|(id, state)| (id.clone(), state.clone()))
            .collect())
    }
}

/// Keeps every emitted submission in memory, in emission order.
///
/// Clones share the same buffer, so a caller can hand one clone to the engine
/// and read the echo back through another.
#[derive(Default, Clone)]
pub struct InMemorySubmissionSink {
    submissions: Arc<RwLock<Vec<(String, FormData)>>>,
}

impl InMemorySubmissionSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn submissions(&self) -> Vec<(String, FormData)> {
        self.submissions.read().await.clone()
    }
}

#[async_trait]
impl SubmissionSink for InMemorySubmissionSink {
    async fn emit(&self, session: &str, submission: FormData) -> Result<()> {
        let mut submissions = self.submissions.write().await;
        submissions.push((session.to_string(), submission));
        Ok(())
    }
}
