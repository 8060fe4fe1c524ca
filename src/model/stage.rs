use std::fmt;

use super::field::Field;

/// The four sequential phases of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Stage {
    #[default]
    PersonalInfo,
    TravelPreferences,
    HealthAndSafety,
    Confirmation,
}

static PERSONAL_INFO_FIELDS: &[Field] = &[
    Field::FullName,
    Field::DateOfBirth,
    Field::Country,
    Field::Email,
    Field::Phone,
];

static TRAVEL_PREFERENCES_FIELDS: &[Field] = &[
    Field::DepartureDate,
    Field::ReturnDate,
    Field::Accommodation,
    Field::SpecialRequests,
];

static HEALTH_AND_SAFETY_FIELDS: &[Field] = &[
    Field::HealthDeclaration,
    Field::EmergencyContact,
    Field::MedicalConditions,
];

/// Number of stages that take input.
pub const INPUT_STAGES: u8 = 3;

impl Stage {
    /// Returns the 1-based stage number.
    pub fn number(self) -> u8 {
        match self {
            Stage::PersonalInfo => 1,
            Stage::TravelPreferences => 2,
            Stage::HealthAndSafety => 3,
            Stage::Confirmation => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Stage::PersonalInfo),
            2 => Some(Stage::TravelPreferences),
            3 => Some(Stage::HealthAndSafety),
            4 => Some(Stage::Confirmation),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Stage::PersonalInfo => "Personal Information",
            Stage::TravelPreferences => "Travel Preferences",
            Stage::HealthAndSafety => "Health and Safety",
            Stage::Confirmation => "Application Submitted",
        }
    }

    /// Returns the fields rendered and editable at this stage.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Stage::PersonalInfo => PERSONAL_INFO_FIELDS,
            Stage::TravelPreferences => TRAVEL_PREFERENCES_FIELDS,
            Stage::HealthAndSafety => HEALTH_AND_SAFETY_FIELDS,
            Stage::Confirmation => &[],
        }
    }

    /// Returns the stage a Next control leads to, if one exists.
    ///
    /// Health and Safety has no Next; it is left by submitting.
    pub fn next(self) -> Option<Self> {
        match self {
            Stage::PersonalInfo => Some(Stage::TravelPreferences),
            Stage::TravelPreferences => Some(Stage::HealthAndSafety),
            Stage::HealthAndSafety | Stage::Confirmation => None,
        }
    }

    /// Returns the stage a Back control leads to, if one exists.
    pub fn prev(self) -> Option<Self> {
        match self {
            Stage::TravelPreferences => Some(Stage::PersonalInfo),
            Stage::HealthAndSafety => Some(Stage::TravelPreferences),
            Stage::PersonalInfo | Stage::Confirmation => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Stage::Confirmation
    }
}

#[mutants::skip]
impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_round_trip() {
        for n in 1..=4 {
            assert_eq!(Stage::from_number(n).map(Stage::number), Some(n));
        }
        assert_eq!(Stage::from_number(0), None);
        assert_eq!(Stage::from_number(5), None);
    }

    #[test]
    fn default_is_first_stage() {
        assert_eq!(Stage::default(), Stage::PersonalInfo);
    }

    #[test]
    fn next_only_from_first_two_stages() {
        assert_eq!(Stage::PersonalInfo.next(), Some(Stage::TravelPreferences));
        assert_eq!(Stage::TravelPreferences.next(), Some(Stage::HealthAndSafety));
        assert_eq!(Stage::HealthAndSafety.next(), None);
        assert_eq!(Stage::Confirmation.next(), None);
    }

    #[test]
    fn prev_only_from_middle_stages() {
        assert_eq!(Stage::PersonalInfo.prev(), None);
        assert_eq!(Stage::TravelPreferences.prev(), Some(Stage::PersonalInfo));
        assert_eq!(Stage::HealthAndSafety.prev(), Some(Stage::TravelPreferences));
        assert_eq!(Stage::Confirmation.prev(), None);
    }

    #[test]
    fn transitions_move_by_exactly_one() {
        for n in 1..=4 {
            let stage = Stage::from_number(n).unwrap();
            if let Some(next) = stage.next() {
                assert_eq!(next.number(), n + 1);
            }
            if let Some(prev) = stage.prev() {
                assert_eq!(prev.number(), n - 1);
            }
        }
    }

    #[test]
    fn every_field_belongs_to_exactly_one_stage() {
        for field in Field::all() {
            let owners = [
                Stage::PersonalInfo,
                Stage::TravelPreferences,
                Stage::HealthAndSafety,
                Stage::Confirmation,
            ]
            .iter()
            .filter(|s| s.fields().contains(field))
            .count();
            assert_eq!(owners, 1, "{field:?}");
        }
    }

    #[test]
    fn only_confirmation_is_terminal() {
        assert!(Stage::Confirmation.is_terminal());
        assert!(!Stage::HealthAndSafety.is_terminal());
        assert!(Stage::Confirmation.fields().is_empty());
    }
}
