use crate::domain::state::WizardState;
use crate::domain::step::Step;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct SessionRow<'a> {
    session: &'a str,
    step: Step,
    submitted: bool,
    errors: String,
}

/// Writes one summary row per session: `session,step,submitted,errors`.
///
/// `errors` holds `field: message` pairs joined by `; `, empty when clean.
pub struct StateWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> StateWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_states<'a, I>(&mut self, sessions: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, &'a WizardState)>,
    {
        for (session, state) in sessions {
            self.writer.serialize(SessionRow {
                session,
                step: state.step,
                submitted: state.submitted,
                errors: state.errors.to_string(),
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::step::Field;

    #[test]
    fn test_writes_header_and_rows() {
        let clean = WizardState::new();
        let mut failing = WizardState::new();
        failing.edit_field(Step::Personal, Field::Email, "x").unwrap();
        failing.next();

        let mut buffer = Vec::new();
        let mut writer = StateWriter::new(&mut buffer);
        writer
            .write_states([("alice", &clean), ("bob", &failing)])
            .unwrap();
        drop(writer);

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "session,step,submitted,errors");
        assert_eq!(lines[1], "alice,1,false,");
        assert_eq!(
            lines[2],
            "bob,1,false,name: Name is required; email: Valid email is required"
        );
    }

    #[test]
    fn test_no_sessions_writes_nothing() {
        let mut buffer = Vec::new();
        let mut writer = StateWriter::new(&mut buffer);
        writer
            .write_states(std::iter::empty::<(&str, &WizardState)>())
            .unwrap();
        drop(writer);
        assert!(buffer.is_empty());
    }
}
