//! Declarative per-step validation.
//!
//! Each step owns a static table of `(field, rule, message)` entries. Running a
//! step evaluates every entry against the current form and collects all
//! failures into a fresh [`FieldErrors`] map; nothing is carried over from a
//! previous run.

use super::form::FormData;
use super::step::{Field, Step};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

// `[0-9]` rather than `\d`: digits are ASCII only.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static ZIP_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());
static CARD_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{9}$").unwrap());
static EXPIRY_DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])/[0-9]{4}$").unwrap());
static CVV_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{3}$").unwrap());

/// How a single field is checked. Values are always trimmed first.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Non-empty after trimming.
    Required,
    /// Non-empty after trimming and matching the pattern.
    Matches(&'static LazyLock<Regex>),
}

impl Rule {
    pub fn accepts(&self, value: &str) -> bool {
        let value = value.trim();
        match self {
            Rule::Required => !value.is_empty(),
            Rule::Matches(pattern) => !value.is_empty() && pattern.is_match(value),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    pub rule: Rule,
    pub message: &'static str,
}

static PERSONAL_RULES: [FieldRule; 2] = [
    FieldRule {
        field: Field::Name,
        rule: Rule::Required,
        message: "Name is required",
    },
    FieldRule {
        field: Field::Email,
        rule: Rule::Matches(&EMAIL_PATTERN),
        message: "Valid email is required",
    },
];

static ADDRESS_RULES: [FieldRule; 3] = [
    FieldRule {
        field: Field::Street,
        rule: Rule::Required,
        message: "Street is required",
    },
    FieldRule {
        field: Field::City,
        rule: Rule::Required,
        message: "City is required",
    },
    FieldRule {
        field: Field::Zip,
        rule: Rule::Matches(&ZIP_PATTERN),
        message: "Valid ZIP code is required (numeric only)",
    },
];

static PAYMENT_RULES: [FieldRule; 3] = [
    FieldRule {
        field: Field::CardNumber,
        rule: Rule::Matches(&CARD_NUMBER_PATTERN),
        message: "Valid card number is required (9 digits only)",
    },
    FieldRule {
        field: Field::ExpiryDate,
        rule: Rule::Matches(&EXPIRY_DATE_PATTERN),
        message: "Valid expiry date is required (mm/yyyy)",
    },
    FieldRule {
        field: Field::Cvv,
        rule: Rule::Matches(&CVV_PATTERN),
        message: "Valid CVV is required (3 digits only)",
    },
];

/// The rule table for a step.
pub fn rules(step: Step) -> &'static [FieldRule] {
    match step {
        Step::Personal => &PERSONAL_RULES,
        Step::Address => &ADDRESS_RULES,
        Step::Payment => &PAYMENT_RULES,
    }
}

/// Field name to message, keyed in field declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

impl<'a> FromIterator<(Field, &'a str)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (Field, &'a str)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, message)| (field, message.to_string()))
                .collect(),
        )
    }
}

/// A step that did not pass, with every failing field of that step.
///
/// This is an observable outcome folded into the wizard state, not an error
/// that aborts anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub step: Step,
    pub errors: FieldErrors,
}

/// Runs every rule of `step` against `form` and returns all failures.
pub fn validate_step(step: Step, form: &FormData) -> FieldErrors {
    rules(step)
        .iter()
        .filter(|entry| !entry.rule.accepts(form.value(entry.field)))
        .map(|entry| (entry.field, entry.message))
        .collect()
}

/// Like [`validate_step`], but as a pass/fail result.
pub fn check_step(step: Step, form: &FormData) -> Result<(), ValidationFailure> {
    let errors = validate_step(step, form);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure { step, errors })
    }
}
