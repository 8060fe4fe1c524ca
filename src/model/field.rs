use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::accommodation::Accommodation;

/// Every field of an [`ApplicationRecord`](super::ApplicationRecord).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FullName,
    DateOfBirth,
    Country,
    Email,
    Phone,
    DepartureDate,
    ReturnDate,
    Accommodation,
    SpecialRequests,
    HealthDeclaration,
    EmergencyContact,
    MedicalConditions,
}

static ALL_FIELDS: &[Field] = &[
    Field::FullName,
    Field::DateOfBirth,
    Field::Country,
    Field::Email,
    Field::Phone,
    Field::DepartureDate,
    Field::ReturnDate,
    Field::Accommodation,
    Field::SpecialRequests,
    Field::HealthDeclaration,
    Field::EmergencyContact,
    Field::MedicalConditions,
];

/// How a field receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Free text, edited character by character.
    Text,
    /// A date string; only digits and `-` are accepted while typing.
    Date,
    /// One of a fixed set of options.
    Choice,
    /// A boolean checkbox.
    Checkbox,
    /// A value supplied by the country picker.
    Country,
}

impl Field {
    /// Returns the identifier used for this field at the rendering boundary
    /// and in the serialized record.
    pub fn name(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::DateOfBirth => "dateOfBirth",
            Field::Country => "country",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::DepartureDate => "departureDate",
            Field::ReturnDate => "returnDate",
            Field::Accommodation => "accommodation",
            Field::SpecialRequests => "specialRequests",
            Field::HealthDeclaration => "healthDeclaration",
            Field::EmergencyContact => "emergencyContact",
            Field::MedicalConditions => "medicalConditions",
        }
    }

    /// Returns the label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::DateOfBirth => "Date of Birth (YYYY-MM-DD)",
            Field::Country => "Country",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::DepartureDate => "Departure Date (YYYY-MM-DD)",
            Field::ReturnDate => "Return Date (YYYY-MM-DD)",
            Field::Accommodation => "Accommodation",
            Field::SpecialRequests => "Special Requests or Preferences",
            Field::HealthDeclaration => "I declare that I am in good health",
            Field::EmergencyContact => "Emergency Contact",
            Field::MedicalConditions => "Any Medical Conditions (if applicable)",
        }
    }

    pub fn kind(self) -> InputKind {
        match self {
            Field::DateOfBirth | Field::DepartureDate | Field::ReturnDate => InputKind::Date,
            Field::Country => InputKind::Country,
            Field::Accommodation => InputKind::Choice,
            Field::HealthDeclaration => InputKind::Checkbox,
            _ => InputKind::Text,
        }
    }

    /// Whether the field must be filled in before the form can move on.
    pub fn is_required(self) -> bool {
        !matches!(
            self,
            Field::Accommodation | Field::SpecialRequests | Field::MedicalConditions
        )
    }

    /// Returns all fields in form order.
    pub fn all() -> &'static [Field] {
        ALL_FIELDS
    }
}

#[mutants::skip]
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|field| field.name() == s)
            .ok_or_else(|| InputError::UnknownField(s.to_string()))
    }
}

/// Errors raised while turning a raw change event into a [`FieldInput`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("unknown accommodation: {0}")]
    UnknownAccommodation(String),
}

/// A new value for exactly one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    FullName(String),
    DateOfBirth(String),
    Country(String),
    Email(String),
    Phone(String),
    DepartureDate(String),
    ReturnDate(String),
    Accommodation(Accommodation),
    SpecialRequests(String),
    HealthDeclaration(bool),
    EmergencyContact(String),
    MedicalConditions(String),
}

impl FieldInput {
    /// Returns the field this input targets.
    pub fn field(&self) -> Field {
        match self {
            FieldInput::FullName(_) => Field::FullName,
            FieldInput::DateOfBirth(_) => Field::DateOfBirth,
            FieldInput::Country(_) => Field::Country,
            FieldInput::Email(_) => Field::Email,
            FieldInput::Phone(_) => Field::Phone,
            FieldInput::DepartureDate(_) => Field::DepartureDate,
            FieldInput::ReturnDate(_) => Field::ReturnDate,
            FieldInput::Accommodation(_) => Field::Accommodation,
            FieldInput::SpecialRequests(_) => Field::SpecialRequests,
            FieldInput::HealthDeclaration(_) => Field::HealthDeclaration,
            FieldInput::EmergencyContact(_) => Field::EmergencyContact,
            FieldInput::MedicalConditions(_) => Field::MedicalConditions,
        }
    }

    /// Builds a string-valued input for `field`.
    ///
    /// Returns `None` for the checkbox and choice fields, which do not carry
    /// free text.
    pub fn text(field: Field, value: String) -> Option<Self> {
        let input = match field {
            Field::FullName => FieldInput::FullName(value),
            Field::DateOfBirth => FieldInput::DateOfBirth(value),
            Field::Country => FieldInput::Country(value),
            Field::Email => FieldInput::Email(value),
            Field::Phone => FieldInput::Phone(value),
            Field::DepartureDate => FieldInput::DepartureDate(value),
            Field::ReturnDate => FieldInput::ReturnDate(value),
            Field::SpecialRequests => FieldInput::SpecialRequests(value),
            Field::EmergencyContact => FieldInput::EmergencyContact(value),
            Field::MedicalConditions => FieldInput::MedicalConditions(value),
            Field::Accommodation | Field::HealthDeclaration => return None,
        };
        Some(input)
    }

    /// Builds an input from a name-keyed change event.
    ///
    /// Checkbox fields take `checked`; every other field takes the raw
    /// `value`.
    pub fn from_change(name: &str, value: &str, checked: bool) -> Result<Self, InputError> {
        let field: Field = name.parse()?;
        match field.kind() {
            InputKind::Checkbox => Ok(FieldInput::HealthDeclaration(checked)),
            InputKind::Choice => value
                .parse::<Accommodation>()
                .map(FieldInput::Accommodation)
                .map_err(InputError::UnknownAccommodation),
            InputKind::Text | InputKind::Date | InputKind::Country => {
                FieldInput::text(field, value.to_string())
                    .ok_or_else(|| InputError::UnknownField(name.to_string()))
            }
        }
    }
}
