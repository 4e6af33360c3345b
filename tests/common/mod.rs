#![allow(dead_code)]

use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const HEADER: [&str; 5] = ["session", "action", "step", "field", "value"];

/// Event rows that take one session from an empty form to a submitted one.
pub fn completed_form(session: &str) -> Vec<[String; 5]> {
    let edit = |step: &str, field: &str, value: &str| {
        [
            session.to_string(),
            "edit".to_string(),
            step.to_string(),
            field.to_string(),
            value.to_string(),
        ]
    };
    let action = |name: &str| {
        [
            session.to_string(),
            name.to_string(),
            String::new(),
            String::new(),
            String::new(),
        ]
    };

    vec![
        edit("1", "name", "Ann"),
        edit("1", "email", "a@b.com"),
        action("next"),
        edit("2", "street", "1 Main St"),
        edit("2", "city", "Springfield"),
        edit("2", "zip", "12345"),
        action("next"),
        edit("3", "cardNumber", "123456789"),
        edit("3", "expiryDate", "01/2030"),
        edit("3", "cvv", "123"),
        action("submit"),
    ]
}

pub fn write_events(path: &Path, rows: &[[String; 5]]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// `sessions` independent sessions, each filled in and submitted.
pub fn generate_sessions(path: &Path, sessions: usize) -> Result<(), Error> {
    let rows: Vec<[String; 5]> = (1..=sessions)
        .flat_map(|i| completed_form(&format!("s{i:04}")))
        .collect();
    write_events(path, &rows)
}
