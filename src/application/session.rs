use crate::domain::form::FormData;
use crate::domain::state::{Transition, WizardState};
use crate::domain::step::{Field, Step};
use crate::error::Result;
use tracing::debug;

/// The boundary a presentation layer drives for a single form.
///
/// Owns exactly one [`WizardState`]. Every call is a synchronous transition;
/// nothing here performs I/O.
#[derive(Debug, Clone, Default)]
pub struct WizardSession {
    state: WizardState,
}

impl WizardSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes a session from a previously captured state.
    pub fn from_state(state: WizardState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn into_state(self) -> WizardState {
        self.state
    }

    /// Sets one field. `step` is the 1-based step number, `field` the camelCase name.
    pub fn edit_field(&mut self, step: u8, field: &str, value: impl Into<String>) -> Result<()> {
        let step = Step::try_from(step)?;
        let field: Field = field.parse()?;
        self.state.edit_field(step, field, value)
    }

    pub fn next(&mut self) -> &WizardState {
        let transition = self.state.next();
        log_transition("next", &transition);
        &self.state
    }

    pub fn prev(&mut self) -> &WizardState {
        let transition = self.state.prev();
        log_transition("prev", &transition);
        &self.state
    }

    pub fn reset(&mut self) -> &WizardState {
        self.state.reset();
        debug!("form reset");
        &self.state
    }

    pub fn is_submitted(&self) -> bool {
        self.state.submitted
    }

    pub fn submission(&self) -> Option<FormData> {
        self.state.submission().cloned()
    }
}

fn log_transition(action: &str, transition: &Transition) {
    match transition {
        Transition::Advanced { from, to } | Transition::Retreated { from, to } => {
            debug!(action, %from, %to, "step changed");
        }
        Transition::Rejected(failure) => {
            debug!(action, step = %failure.step, errors = %failure.errors, "validation failed");
        }
        Transition::Submitted => debug!(action, "form submitted"),
        Transition::Unchanged => debug!(action, "no transition"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WizardError;

    fn submitted_session() -> WizardSession {
        let mut session = WizardSession::new();
        session.edit_field(1, "name", "Ann").unwrap();
        session.edit_field(1, "email", "a@b.com").unwrap();
        session.next();
        session.edit_field(2, "street", "1 Main St").unwrap();
        session.edit_field(2, "city", "Springfield").unwrap();
        session.edit_field(2, "zip", "12345").unwrap();
        session.next();
        session.edit_field(3, "cardNumber", "123456789").unwrap();
        session.edit_field(3, "expiryDate", "01/2030").unwrap();
        session.edit_field(3, "cvv", "123").unwrap();
        session.next();
        session
    }

    #[test]
    fn test_first_step_rejection() {
        let mut session = WizardSession::new();
        session.edit_field(1, "name", "").unwrap();
        session.edit_field(1, "email", "x").unwrap();

        let state = session.next();
        assert_eq!(state.step, Step::Personal);
        assert_eq!(state.errors.get(Field::Name), Some("Name is required"));
        assert_eq!(state.errors.get(Field::Email), Some("Valid email is required"));
    }

    #[test]
    fn test_first_step_advance() {
        let mut session = WizardSession::new();
        session.edit_field(1, "name", "Ann").unwrap();
        session.edit_field(1, "email", "a@b.com").unwrap();

        let state = session.next();
        assert_eq!(state.step, Step::Address);
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_full_walkthrough_submits() {
        let session = submitted_session();
        assert!(session.is_submitted());

        let submission = session.submission().unwrap();
        assert_eq!(submission.personal.email, "a@b.com");
        assert_eq!(submission.address.city, "Springfield");
        assert_eq!(submission.payment.card_number, "123456789");
    }

    #[test]
    fn test_reset_after_submission() {
        let mut session = submitted_session();
        let state = session.reset();
        assert_eq!(state.step, Step::Personal);
        assert!(!state.submitted);
        assert!(state.errors.is_empty());
        assert_eq!(state.form, FormData::default());
        assert!(session.submission().is_none());
    }

    #[test]
    fn test_prev_from_address_always_succeeds() {
        let mut session = WizardSession::new();
        session.edit_field(1, "name", "Ann").unwrap();
        session.edit_field(1, "email", "a@b.com").unwrap();
        session.next();
        session.next();
        assert!(!session.state().errors.is_empty());

        let state = session.prev();
        assert_eq!(state.step, Step::Personal);
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_edit_field_rejects_unknown_inputs() {
        let mut session = WizardSession::new();
        assert!(matches!(
            session.edit_field(4, "name", "Ann"),
            Err(WizardError::UnknownStep(4))
        ));
        assert!(matches!(
            session.edit_field(1, "nickname", "Ann"),
            Err(WizardError::UnknownField(_))
        ));
        assert!(matches!(
            session.edit_field(3, "email", "a@b.com"),
            Err(WizardError::FieldNotInStep { step: 3, .. })
        ));
        assert_eq!(session.state(), &WizardState::new());
    }
}
