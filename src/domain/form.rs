use super::step::Field;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct PersonalDetails {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub zip: String,
}

/// Placeholder payment data. The card number is a 9-digit stand-in, not a PAN.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

/// The three per-step records of one form.
///
/// This is also the consolidated record handed out once a form is submitted.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct FormData {
    pub personal: PersonalDetails,
    pub address: Address,
    pub payment: PaymentDetails,
}

impl FormData {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.personal.name,
            Field::Email => &self.personal.email,
            Field::Street => &self.address.street,
            Field::City => &self.address.city,
            Field::Zip => &self.address.zip,
            Field::CardNumber => &self.payment.card_number,
            Field::ExpiryDate => &self.payment.expiry_date,
            Field::Cvv => &self.payment.cvv,
        }
    }

    /// Replaces a single field, leaving the rest of its record as is.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.personal.name,
            Field::Email => &mut self.personal.email,
            Field::Street => &mut self.address.street,
            Field::City => &mut self.address.city,
            Field::Zip => &mut self.address.zip,
            Field::CardNumber => &mut self.payment.card_number,
            Field::ExpiryDate => &mut self.payment.expiry_date,
            Field::Cvv => &mut self.payment.cvv,
        };
        *slot = value.into();
    }
}
