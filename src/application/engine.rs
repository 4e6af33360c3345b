use crate::application::session::WizardSession;
use crate::domain::event::{Action, FormEvent};
use crate::domain::ports::{SessionStoreBox, SubmissionSinkBox};
use crate::domain::state::WizardState;
use crate::error::{Result, WizardError};
use tracing::{debug, info};

/// Replays form events against many isolated sessions.
///
/// `WizardEngine` owns the storage and the submission sink. Each event is
/// applied to its own session and persisted before the call returns, so the
/// per-session order is the order events are submitted in.
pub struct WizardEngine {
    session_store: SessionStoreBox,
    submission_sink: SubmissionSinkBox,
}

impl WizardEngine {
    /// Creates a new `WizardEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `session_store` - Where per-session wizard state is kept between events.
    /// * `submission_sink` - Receives every form that reaches the submitted state.
    pub fn new(session_store: SessionStoreBox, submission_sink: SubmissionSinkBox) -> Self {
        Self {
            session_store,
            submission_sink,
        }
    }

    /// Applies one event to its session.
    ///
    /// Unknown sessions start fresh. A malformed edit fails without touching the
    /// stored state. When the event moves the session into the submitted state
    /// the consolidated record is emitted exactly once.
    pub async fn process_event(&self, event: FormEvent) -> Result<()> {
        let mut session = self
            .session_store
            .get(&event.session)
            .await?
            .map(WizardSession::from_state)
            .unwrap_or_default();

        let was_submitted = session.is_submitted();

        match event.action {
            Action::Edit => {
                let step = event.step.ok_or(WizardError::MissingColumn("step"))?;
                let field = event
                    .field
                    .as_deref()
                    .ok_or(WizardError::MissingColumn("field"))?;
                session.edit_field(step, field, event.value.unwrap_or_default())?;
            }
            Action::Next | Action::Submit => {
                session.next();
            }
            Action::Prev => {
                session.prev();
            }
            Action::Reset => {
                session.reset();
            }
        }

        if !was_submitted && let Some(submission) = session.submission() {
            info!(session = %event.session, "form submitted");
            self.submission_sink
                .emit(&event.session, submission)
                .await?;
        }

        debug!(
            session = %event.session,
            step = %session.state().step,
            submitted = session.is_submitted(),
            "event applied"
        );
        self.session_store
            .store(&event.session, session.into_state())
            .await
    }

    /// Consumes the engine and returns the final state of every session, ordered by id.
    pub async fn into_results(self) -> Result<Vec<(String, WizardState)>> {
        let mut sessions = self.session_store.get_all().await?;
        sessions.sort_by(|(a, _), (b, _)| a.cmp(b));
        Ok(sessions)
    }
}
