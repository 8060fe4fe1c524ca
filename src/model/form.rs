//! The stepped form controller: one owned state object holding the record,
//! its validation errors and the current stage.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, info, warn};

use super::field::{Field, FieldInput};
use super::gate::stage_gate;
use super::record::ApplicationRecord;
use super::stage::Stage;
use super::validation::{ValidationErrors, validate_field};

/// Message shown when a submission is blocked by outstanding errors.
pub const SUBMIT_BLOCKED_MESSAGE: &str = "Please fix validation errors before submitting.";

/// When fields get validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Only fields the visitor has changed or left get an error entry.
    #[default]
    Touched,
    /// Every field of a stage is validated as soon as the stage is entered.
    Eager,
}

impl FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "touched" => Ok(ValidationMode::Touched),
            "eager" => Ok(ValidationMode::Eager),
            _ => Err(s.to_string()),
        }
    }
}

#[mutants::skip]
impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::Touched => f.write_str("touched"),
            ValidationMode::Eager => f.write_str("eager"),
        }
    }
}

/// Which navigation controls are currently enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub back: bool,
    pub next: bool,
    pub submit: bool,
}

/// Result of a submit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The application moved to the confirmation stage.
    Submitted,
    /// Errors remain; the form stays on the current stage.
    Blocked,
    /// Submit is not offered at the current stage.
    Unavailable,
}

/// In-progress application plus its navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationForm {
    record: ApplicationRecord,
    country: String,
    errors: ValidationErrors,
    stage: Stage,
    mode: ValidationMode,
}

impl Default for ApplicationForm {
    fn default() -> Self {
        Self::new(ValidationMode::default())
    }
}

impl ApplicationForm {
    /// Creates an empty application on the first stage.
    pub fn new(mode: ValidationMode) -> Self {
        let mut form = Self {
            record: ApplicationRecord::default(),
            country: String::new(),
            errors: ValidationErrors::new(),
            stage: Stage::default(),
            mode,
        };
        form.enter_stage();
        form
    }

    pub fn record(&self) -> &ApplicationRecord {
        &self.record
    }

    /// Returns the country last reported by the country picker.
    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Returns the inline error for `field`, if any.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Merges a changed value into the record and revalidates that field.
    pub fn change(&mut self, input: FieldInput) {
        let field = input.field();
        if let FieldInput::Country(ref name) = input {
            self.country.clone_from(name);
        }
        let outcome = validate_field(&input);
        self.record.apply(input);
        self.errors.record(field, outcome);
    }

    /// Accepts a country reported by the country picker.
    pub fn select_country(&mut self, name: impl Into<String>) {
        self.change(FieldInput::Country(name.into()));
    }

    /// Revalidates `field` against its current value, as when focus leaves it.
    pub fn blur(&mut self, field: Field) {
        self.validate(field);
    }

    /// Returns `true` if the stage gate lets the visitor leave the current stage.
    pub fn stage_complete(&self) -> bool {
        stage_gate(self.stage, &self.record, &self.country)
    }

    pub fn controls(&self) -> Controls {
        Controls {
            back: self.stage.prev().is_some(),
            next: self.stage.next().is_some() && self.stage_complete(),
            submit: self.stage == Stage::HealthAndSafety,
        }
    }

    /// Moves to the next stage if the gate allows it.
    ///
    /// Returns the new stage, or `None` if the form did not move.
    pub fn next(&mut self) -> Option<Stage> {
        if !self.controls().next {
            debug!(stage = self.stage.number(), "next refused");
            return None;
        }
        let next = self.stage.next()?;
        self.move_to(next);
        Some(next)
    }

    /// Moves to the previous stage, if there is one.
    pub fn back(&mut self) -> Option<Stage> {
        let prev = self.stage.prev()?;
        self.move_to(prev);
        Some(prev)
    }

    /// Attempts to submit the application from the Health and Safety stage.
    ///
    /// The stage's required fields are checked first; submission then needs
    /// every recorded error to be clear.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.controls().submit {
            return SubmitOutcome::Unavailable;
        }

        for field in self.stage.fields() {
            if field.is_required() {
                self.validate(*field);
            }
        }

        if !self.errors.is_clear() {
            let fields: Vec<&str> = self.errors.iter().map(|(f, _)| f.name()).collect();
            warn!(?fields, "submission blocked by validation errors");
            return SubmitOutcome::Blocked;
        }

        self.move_to(Stage::Confirmation);
        match serde_json::to_string(&self.record) {
            Ok(record) => info!(%record, "application submitted"),
            Err(e) => warn!(error = %e, "application submitted but could not be serialized"),
        }
        SubmitOutcome::Submitted
    }

    fn validate(&mut self, field: Field) {
        let input = self.record.input_for(field);
        self.errors.record(field, validate_field(&input));
    }

    fn move_to(&mut self, stage: Stage) {
        debug!(from = self.stage.number(), to = stage.number(), "stage transition");
        self.stage = stage;
        self.enter_stage();
    }

    fn enter_stage(&mut self) {
        if self.mode == ValidationMode::Eager {
            for field in self.stage.fields() {
                self.validate(*field);
            }
        }
    }
}
