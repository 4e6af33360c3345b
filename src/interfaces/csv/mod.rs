//! CSV input and output for recorded form sessions.

pub mod event_reader;
pub mod state_writer;
