//! Domain layer: form records, the step cursor, validation rules and the
//! wizard state machine, plus the ports the application layer talks through.

pub mod event;
pub mod form;
pub mod ports;
pub mod state;
pub mod step;
pub mod validation;
