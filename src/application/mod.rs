//! Application layer orchestrating the wizard state machine.
//!
//! `WizardSession` is the single-form API a presentation layer drives.
//! `WizardEngine` replays recorded form events across many sessions, keeping
//! each session's state in a `SessionStore` and handing completed forms to a
//! `SubmissionSink`.

pub mod engine;
pub mod session;
