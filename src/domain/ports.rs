use super::form::FormData;
use super::state::WizardState;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn store(&self, session: &str, state: WizardState) -> Result<()>;
    async fn get(&self, session: &str) -> Result<Option<WizardState>>;
    async fn get_all(&self) -> Result<Vec<(String, WizardState)>>;
}

/// Receives the consolidated record of every form that reaches `Submitted`.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn emit(&self, session: &str, submission: FormData) -> Result<()>;
}

pub type SessionStoreBox = Box<dyn SessionStore>;
pub type SubmissionSinkBox = Box<dyn SubmissionSink>;
