use crate::domain::event::FormEvent;
use crate::error::{Result, WizardError};
use std::io::Read;

/// Reads form events from a CSV source.
///
/// Expects the header `session,action,step,field,value`. Cells are trimmed,
/// short rows are accepted and empty cells read as absent.
pub struct EventReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EventReader<R> {
    /// Creates a new `EventReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes events.
    pub fn events(self) -> impl Iterator<Item = Result<FormEvent>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(WizardError::from))
    }
}
