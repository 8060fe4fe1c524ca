use super::record::ApplicationRecord;
use super::stage::Stage;
use super::validation::{is_valid_email, is_valid_phone};

/// Decides whether the visitor may move forward from `stage`.
///
/// `country` is the value last reported by the country picker; it mirrors
/// `record.country`. The gate never touches the error map, so it can pass or
/// fail on fields that show no inline error.
pub fn stage_gate(stage: Stage, record: &ApplicationRecord, country: &str) -> bool {
    match stage {
        Stage::PersonalInfo => {
            !record.full_name.trim().is_empty()
                && !record.date_of_birth.is_empty()
                && !country.is_empty()
                && !record.email.trim().is_empty()
                && is_valid_email(&record.email)
                && is_valid_phone(&record.phone)
        }
        // Accommodation always holds one of its options.
        Stage::TravelPreferences => {
            !record.departure_date.is_empty() && !record.return_date.is_empty()
        }
        Stage::HealthAndSafety => {
            record.health_declaration && !record.emergency_contact.trim().is_empty()
        }
        Stage::Confirmation => true,
    }
}
