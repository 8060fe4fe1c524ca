use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::field::{Field, FieldInput};

/// A user-correctable problem with a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Full Name is required.")]
    FullNameRequired,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
    #[error("Please provide a departure date.")]
    DepartureDateRequired,
    #[error("Please provide a return date.")]
    ReturnDateRequired,
    #[error("Please select a country.")]
    CountryRequired,
    #[error("Health declaration is required.")]
    HealthDeclarationRequired,
    #[error("Emergency Contact is required.")]
    EmergencyContactRequired,
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid hardcoded regex"));

// `\d` in the regex crate matches any Unicode digit.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,15}$").expect("valid hardcoded regex"));

/// Returns `true` if `email` contains something shaped like `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Returns `true` if `phone` is 10 to 15 decimal digits and nothing else.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Validates one field's candidate value.
///
/// Fields without a rule (date of birth, accommodation and the free-text
/// notes) always pass.
pub fn validate_field(input: &FieldInput) -> Result<(), ValidationError> {
    match input {
        FieldInput::FullName(v) if v.trim().is_empty() => Err(ValidationError::FullNameRequired),
        FieldInput::Email(v) if !is_valid_email(v) => Err(ValidationError::InvalidEmail),
        FieldInput::Phone(v) if !is_valid_phone(v) => Err(ValidationError::InvalidPhone),
        FieldInput::DepartureDate(v) if v.is_empty() => {
            Err(ValidationError::DepartureDateRequired)
        }
        FieldInput::ReturnDate(v) if v.is_empty() => Err(ValidationError::ReturnDateRequired),
        FieldInput::Country(v) if v.is_empty() => Err(ValidationError::CountryRequired),
        FieldInput::HealthDeclaration(false) => Err(ValidationError::HealthDeclarationRequired),
        FieldInput::EmergencyContact(v) if v.trim().is_empty() => {
            Err(ValidationError::EmergencyContactRequired)
        }
        _ => Ok(()),
    }
}

/// Current error message per field.
///
/// A field that has been validated and passed holds an empty message; a field
/// that was never validated has no entry at all. Both count as "no error".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entry for `field` with the outcome of a validation run.
    pub fn record(&mut self, field: Field, outcome: Result<(), ValidationError>) {
        let message = match outcome {
            Ok(()) => String::new(),
            Err(e) => e.to_string(),
        };
        self.entries.insert(field, message);
    }

    /// Returns the error message for `field`, if it currently has one.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries
            .get(&field)
            .map(String::as_str)
            .filter(|msg| !msg.is_empty())
    }

    /// Returns `true` if `field` has been validated at least once.
    pub fn is_tracked(&self, field: Field) -> bool {
        self.entries.contains_key(&field)
    }

    /// Returns `true` if no field currently has an error.
    pub fn is_clear(&self) -> bool {
        self.entries.values().all(String::is_empty)
    }

    /// Iterates over the fields that currently have an error, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries
            .iter()
            .filter(|(_, msg)| !msg.is_empty())
            .map(|(field, msg)| (*field, msg.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    // --- full name ---

    #[test]
    fn full_name_blank() {
        assert_eq!(
            validate_field(&FieldInput::FullName("   ".into())),
            Err(ValidationError::FullNameRequired)
        );
    }

    #[test]
    fn full_name_present() {
        assert_eq!(validate_field(&FieldInput::FullName("Jane".into())), Ok(()));
    }

    #[quickcheck]
    fn full_name_error_iff_blank(s: String) -> bool {
        let result = validate_field(&FieldInput::FullName(s.clone()));
        if s.trim().is_empty() {
            result == Err(ValidationError::FullNameRequired)
        } else {
            result.is_ok()
        }
    }

    #[quickcheck]
    fn whitespace_only_full_name_is_rejected(n: u8) -> bool {
        let s = " \t\n".repeat(usize::from(n % 8));
        validate_field(&FieldInput::FullName(s)).is_err()
    }

    // --- email ---

    #[test]
    fn email_simple() {
        assert_eq!(validate_field(&FieldInput::Email("a@b.com".into())), Ok(()));
    }

    #[test]
    fn email_without_at() {
        assert_eq!(
            validate_field(&FieldInput::Email("abc".into())),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn email_without_dot_in_domain() {
        assert!(!is_valid_email("jane@doe"));
    }

    #[test]
    fn email_pattern_is_unanchored() {
        assert!(is_valid_email("  jane@doe.com  "));
    }

    #[test]
    fn email_empty() {
        assert!(!is_valid_email(""));
    }

    #[quickcheck]
    fn email_without_at_sign_is_rejected(s: String) -> bool {
        let s: String = s.chars().filter(|c| *c != '@').collect();
        validate_field(&FieldInput::Email(s)) == Err(ValidationError::InvalidEmail)
    }

    // --- phone ---

    #[test]
    fn phone_ten_digits() {
        assert_eq!(
            validate_field(&FieldInput::Phone("1234567890".into())),
            Ok(())
        );
    }

    #[test]
    fn phone_fifteen_digits() {
        assert!(is_valid_phone("123456789012345"));
    }

    #[test]
    fn phone_too_short() {
        assert_eq!(
            validate_field(&FieldInput::Phone("123".into())),
            Err(ValidationError::InvalidPhone)
        );
    }

    #[test]
    fn phone_too_long() {
        assert_eq!(
            validate_field(&FieldInput::Phone("12345678901234567".into())),
            Err(ValidationError::InvalidPhone)
        );
    }

    #[test]
    fn phone_with_separators() {
        assert!(!is_valid_phone("123-456-7890"));
        assert!(!is_valid_phone("+11234567890"));
    }

    #[test]
    fn phone_non_ascii_digits() {
        assert!(!is_valid_phone("١٢٣٤٥٦٧٨٩٠"));
    }

    #[quickcheck]
    fn phone_accepted_iff_ten_to_fifteen_digits(digits: Vec<u8>) -> bool {
        let s: String = digits.iter().map(|d| char::from(b'0' + d % 10)).collect();
        is_valid_phone(&s) == (10..=15).contains(&s.len())
    }

    // --- dates, country, health, contact ---

    #[test]
    fn departure_date_required() {
        assert_eq!(
            validate_field(&FieldInput::DepartureDate(String::new())),
            Err(ValidationError::DepartureDateRequired)
        );
        assert_eq!(
            validate_field(&FieldInput::DepartureDate("2030-07-01".into())),
            Ok(())
        );
    }

    #[test]
    fn return_date_required() {
        assert_eq!(
            validate_field(&FieldInput::ReturnDate(String::new())),
            Err(ValidationError::ReturnDateRequired)
        );
    }

    #[test]
    fn return_before_departure_is_not_checked() {
        assert_eq!(
            validate_field(&FieldInput::ReturnDate("1999-01-01".into())),
            Ok(())
        );
    }

    #[test]
    fn country_required() {
        assert_eq!(
            validate_field(&FieldInput::Country(String::new())),
            Err(ValidationError::CountryRequired)
        );
        assert_eq!(validate_field(&FieldInput::Country("France".into())), Ok(()));
    }

    #[test]
    fn health_declaration_must_be_checked() {
        assert_eq!(
            validate_field(&FieldInput::HealthDeclaration(false)),
            Err(ValidationError::HealthDeclarationRequired)
        );
        assert_eq!(validate_field(&FieldInput::HealthDeclaration(true)), Ok(()));
    }

    #[test]
    fn emergency_contact_blank() {
        assert_eq!(
            validate_field(&FieldInput::EmergencyContact(" ".into())),
            Err(ValidationError::EmergencyContactRequired)
        );
    }

    #[test]
    fn fields_without_rules_always_pass() {
        assert_eq!(validate_field(&FieldInput::DateOfBirth(String::new())), Ok(()));
        assert_eq!(
            validate_field(&FieldInput::SpecialRequests(String::new())),
            Ok(())
        );
        assert_eq!(
            validate_field(&FieldInput::MedicalConditions(String::new())),
            Ok(())
        );
    }

    #[test]
    fn messages() {
        assert_eq!(
            ValidationError::FullNameRequired.to_string(),
            "Full Name is required."
        );
        assert_eq!(
            ValidationError::DepartureDateRequired.to_string(),
            "Please provide a departure date."
        );
        assert_eq!(
            ValidationError::EmergencyContactRequired.to_string(),
            "Emergency Contact is required."
        );
    }

    // --- ValidationErrors ---

    #[test]
    fn empty_map_is_clear() {
        let errors = ValidationErrors::new();
        assert!(errors.is_clear());
        assert_eq!(errors.get(Field::Email), None);
        assert!(!errors.is_tracked(Field::Email));
    }

    #[test]
    fn recorded_error_is_reported() {
        let mut errors = ValidationErrors::new();
        errors.record(Field::Email, Err(ValidationError::InvalidEmail));
        assert!(!errors.is_clear());
        assert_eq!(
            errors.get(Field::Email),
            Some("Please enter a valid email address.")
        );
    }

    #[test]
    fn passing_validation_clears_entry() {
        let mut errors = ValidationErrors::new();
        errors.record(Field::Phone, Err(ValidationError::InvalidPhone));
        errors.record(Field::Phone, Ok(()));
        assert!(errors.is_clear());
        assert!(errors.is_tracked(Field::Phone));
        assert_eq!(errors.get(Field::Phone), None);
    }

    #[test]
    fn iter_skips_empty_entries() {
        let mut errors = ValidationErrors::new();
        errors.record(Field::Phone, Err(ValidationError::InvalidPhone));
        errors.record(Field::FullName, Ok(()));
        errors.record(Field::Country, Err(ValidationError::CountryRequired));
        let fields: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::Country, Field::Phone]);
    }
}
