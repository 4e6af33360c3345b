use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Edit,
    Next,
    Prev,
    /// Same as `Next`; on the last step it is the final submit.
    Submit,
    Reset,
}

/// One recorded interaction with a form session.
///
/// `step`, `field` and `value` are only read for `edit`.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct FormEvent {
    pub session: String,
    pub action: Action,
    pub step: Option<u8>,
    pub field: Option<String>,
    pub value: Option<String>,
}

impl FormEvent {
    pub fn new(session: impl Into<String>, action: Action) -> Self {
        Self {
            session: session.into(),
            action,
            step: None,
            field: None,
            value: None,
        }
    }

    pub fn edit(
        session: impl Into<String>,
        step: u8,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            session: session.into(),
            action: Action::Edit,
            step: Some(step),
            field: Some(field.into()),
            value: Some(value.into()),
        }
    }
}
