use serde::{Deserialize, Serialize};

use super::accommodation::Accommodation;
use super::field::{Field, FieldInput};

/// Everything the visitor has entered so far.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub full_name: String,
    pub date_of_birth: String,
    pub country: String,
    pub email: String,
    pub phone: String,
    pub departure_date: String,
    pub return_date: String,
    pub accommodation: Accommodation,
    pub special_requests: String,
    pub health_declaration: bool,
    pub emergency_contact: String,
    pub medical_conditions: String,
}

impl ApplicationRecord {
    /// Merges a single field's new value into the record.
    pub fn apply(&mut self, input: FieldInput) {
        match input {
            FieldInput::FullName(v) => self.full_name = v,
            FieldInput::DateOfBirth(v) => self.date_of_birth = v,
            FieldInput::Country(v) => self.country = v,
            FieldInput::Email(v) => self.email = v,
            FieldInput::Phone(v) => self.phone = v,
            FieldInput::DepartureDate(v) => self.departure_date = v,
            FieldInput::ReturnDate(v) => self.return_date = v,
            FieldInput::Accommodation(v) => self.accommodation = v,
            FieldInput::SpecialRequests(v) => self.special_requests = v,
            FieldInput::HealthDeclaration(v) => self.health_declaration = v,
            FieldInput::EmergencyContact(v) => self.emergency_contact = v,
            FieldInput::MedicalConditions(v) => self.medical_conditions = v,
        }
    }

    /// Returns the current value of `field` as an input, e.g. for blur
    /// validation.
    pub fn input_for(&self, field: Field) -> FieldInput {
        match field {
            Field::FullName => FieldInput::FullName(self.full_name.clone()),
            Field::DateOfBirth => FieldInput::DateOfBirth(self.date_of_birth.clone()),
            Field::Country => FieldInput::Country(self.country.clone()),
            Field::Email => FieldInput::Email(self.email.clone()),
            Field::Phone => FieldInput::Phone(self.phone.clone()),
            Field::DepartureDate => FieldInput::DepartureDate(self.departure_date.clone()),
            Field::ReturnDate => FieldInput::ReturnDate(self.return_date.clone()),
            Field::Accommodation => FieldInput::Accommodation(self.accommodation),
            Field::SpecialRequests => FieldInput::SpecialRequests(self.special_requests.clone()),
            Field::HealthDeclaration => FieldInput::HealthDeclaration(self.health_declaration),
            Field::EmergencyContact => FieldInput::EmergencyContact(self.emergency_contact.clone()),
            Field::MedicalConditions => {
                FieldInput::MedicalConditions(self.medical_conditions.clone())
            }
        }
    }

    /// Returns the string value of a free-text field, or `None` for the
    /// checkbox and choice fields.
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::FullName => &self.full_name,
            Field::DateOfBirth => &self.date_of_birth,
            Field::Country => &self.country,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::DepartureDate => &self.departure_date,
            Field::ReturnDate => &self.return_date,
            Field::SpecialRequests => &self.special_requests,
            Field::EmergencyContact => &self.emergency_contact,
            Field::MedicalConditions => &self.medical_conditions,
            Field::Accommodation | Field::HealthDeclaration => return None,
        };
        Some(value)
    }
}
