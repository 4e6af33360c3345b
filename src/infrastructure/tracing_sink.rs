use crate::domain::form::FormData;
use crate::domain::ports::SubmissionSink;
use crate::error::Result;
use async_trait::async_trait;
use tracing::info;

/// Echoes each submission as a structured log event.
///
/// The consolidated record is rendered as a single JSON string so log
/// collectors receive it in one field.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSubmissionSink;

impl TracingSubmissionSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SubmissionSink for TracingSubmissionSink {
    async fn emit(&self, session: &str, submission: FormData) -> Result<()> {
        let data = serde_json::to_string(&submission)?;
        info!(target: "stepform::submissions", session, %data, "Submitted data");
        Ok(())
    }
}
