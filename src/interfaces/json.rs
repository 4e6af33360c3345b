use crate::domain::state::WizardState;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct SessionDocument<'a> {
    session: &'a str,
    #[serde(flatten)]
    state: &'a WizardState,
}

/// Writes all sessions as a pretty-printed JSON array, including the records.
pub fn write_states<'a, W, I>(mut sink: W, sessions: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = (&'a str, &'a WizardState)>,
{
    let documents: Vec<SessionDocument<'a>> = sessions
        .into_iter()
        .map(|(session, state)| SessionDocument { session, state })
        .collect();
    serde_json::to_writer_pretty(&mut sink, &documents)?;
    writeln!(sink)?;
    Ok(())
}
