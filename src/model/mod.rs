mod accommodation;
mod field;
mod form;
mod gate;
mod record;
mod stage;
mod validation;

pub use accommodation::Accommodation;
pub use field::{Field, FieldInput, InputError, InputKind};
pub use form::{
    ApplicationForm, Controls, SUBMIT_BLOCKED_MESSAGE, SubmitOutcome, ValidationMode,
};
pub use gate::stage_gate;
pub use record::ApplicationRecord;
pub use stage::{INPUT_STAGES, Stage};
pub use validation::{
    ValidationError, ValidationErrors, is_valid_email, is_valid_phone, validate_field,
};
