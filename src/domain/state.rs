use super::form::FormData;
use super::step::{Field, Step};
use super::validation::{FieldErrors, ValidationFailure, check_step};
use crate::error::{Result, WizardError};
use serde::Serialize;

/// Where a form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing(Step),
    Submitted,
}

/// What a navigation request did to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Advanced { from: Step, to: Step },
    Retreated { from: Step, to: Step },
    Rejected(ValidationFailure),
    Submitted,
    /// The request had no effect (e.g. `prev` on the first step).
    Unchanged,
}

/// The complete state of one form session.
///
/// Created on step 1 with empty records and no errors. Field edits replace a
/// single value; navigation moves the step cursor and always leaves `errors`
/// either cleared or fully replaced by the latest validation run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct WizardState {
    pub step: Step,
    pub submitted: bool,
    pub errors: FieldErrors,
    #[serde(flatten)]
    pub form: FormData,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.submitted {
            Phase::Submitted
        } else {
            Phase::Editing(self.step)
        }
    }

    /// Replaces one field of the given step's record. Step and errors are untouched.
    pub fn edit_field(&mut self, step: Step, field: Field, value: impl Into<String>) -> Result<()> {
        if self.submitted {
            return Err(WizardError::AlreadySubmitted);
        }
        if field.step() != step {
            return Err(WizardError::FieldNotInStep {
                field: field.to_string(),
                step: step.number(),
            });
        }
        self.form.set(field, value);
        Ok(())
    }

    /// Validates the current step and moves forward on success.
    ///
    /// On the last step every step is re-validated in order and the first
    /// failing one wins; its errors replace whatever was there before.
    pub fn next(&mut self) -> Transition {
        if self.submitted {
            return Transition::Unchanged;
        }

        let from = self.step;
        let outcome = match from.next() {
            Some(to) => check_step(from, &self.form).map(|()| Transition::Advanced { from, to }),
            None => Step::ALL
                .iter()
                .try_for_each(|step| check_step(*step, &self.form))
                .map(|()| Transition::Submitted),
        };

        match outcome {
            Ok(transition) => {
                match transition {
                    Transition::Advanced { to, .. } => self.step = to,
                    Transition::Submitted => self.submitted = true,
                    _ => {}
                }
                self.errors.clear();
                transition
            }
            Err(failure) => {
                self.errors = failure.errors.clone();
                Transition::Rejected(failure)
            }
        }
    }

    /// Moves back one step without validating.
    pub fn prev(&mut self) -> Transition {
        if self.submitted {
            return Transition::Unchanged;
        }
        match self.step.prev() {
            Some(to) => {
                let from = self.step;
                self.step = to;
                self.errors.clear();
                Transition::Retreated { from, to }
            }
            None => Transition::Unchanged,
        }
    }

    /// Back to step 1 with empty records.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The consolidated record, available only once submitted.
    pub fn submission(&self) -> Option<&FormData> {
        self.submitted.then_some(&self.form)
    }
}
