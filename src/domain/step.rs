use crate::error::WizardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three sequential screens of the wizard.
///
/// Steps are numbered 1 to 3 at every boundary (CSV, JSON, the session API).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Step {
    #[default]
    Personal,
    Address,
    Payment,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Personal, Step::Address, Step::Payment];

    pub fn number(self) -> u8 {
        match self {
            Step::Personal => 1,
            Step::Address => 2,
            Step::Payment => 3,
        }
    }

    pub fn next(self) -> Option<Step> {
        match self {
            Step::Personal => Some(Step::Address),
            Step::Address => Some(Step::Payment),
            Step::Payment => None,
        }
    }

    pub fn prev(self) -> Option<Step> {
        match self {
            Step::Personal => None,
            Step::Address => Some(Step::Personal),
            Step::Payment => Some(Step::Address),
        }
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}

impl TryFrom<u8> for Step {
    type Error = WizardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Step::Personal),
            2 => Ok(Step::Address),
            3 => Ok(Step::Payment),
            other => Err(WizardError::UnknownStep(other)),
        }
    }
}

impl From<Step> for u8 {
    fn from(step: Step) -> Self {
        step.number()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl Serialize for Step {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.number())
    }
}

impl<'de> Deserialize<'de> for Step {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let number = u8::deserialize(deserializer)?;
        Step::try_from(number).map_err(serde::de::Error::custom)
    }
}

/// A single named input, addressed by its camelCase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Street,
    City,
    Zip,
    CardNumber,
    ExpiryDate,
    Cvv,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Street => "street",
            Field::City => "city",
            Field::Zip => "zip",
            Field::CardNumber => "cardNumber",
            Field::ExpiryDate => "expiryDate",
            Field::Cvv => "cvv",
        }
    }

    /// The step whose record owns this field.
    pub fn step(self) -> Step {
        match self {
            Field::Name | Field::Email => Step::Personal,
            Field::Street | Field::City | Field::Zip => Step::Address,
            Field::CardNumber | Field::ExpiryDate | Field::Cvv => Step::Payment,
        }
    }
}

impl FromStr for Field {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "street" => Ok(Field::Street),
            "city" => Ok(Field::City),
            "zip" => Ok(Field::Zip),
            "cardNumber" => Ok(Field::CardNumber),
            "expiryDate" => Ok(Field::ExpiryDate),
            "cvv" => Ok(Field::Cvv),
            other => Err(WizardError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
