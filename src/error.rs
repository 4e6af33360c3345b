use thiserror::Error;

#[derive(Error, Debug)]
pub enum WizardError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unknown step: {0} (expected 1, 2 or 3)")]
    UnknownStep(u8),
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Field `{field}` does not belong to step {step}")]
    FieldNotInStep { field: String, step: u8 },
    #[error("Form already submitted; reset before editing")]
    AlreadySubmitted,
    #[error("Event is missing the `{0}` column")]
    MissingColumn(&'static str),
}

pub type Result<T> = std::result::Result<T, WizardError>;
