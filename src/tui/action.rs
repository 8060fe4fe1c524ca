//! Actions returned by screen event handlers.

use crate::model::{Field, FieldInput};

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` applies these to the [`ApplicationForm`](crate::model::ApplicationForm)
/// and navigates between screens.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Merge a changed value into the application and revalidate it.
    Change(FieldInput),
    /// Focus left the given field.
    Blur(Field),
    /// The country picker reported a country.
    SelectCountry(String),
    /// Move to the next stage.
    Next,
    /// Move to the previous stage.
    Back,
    /// Submit the application.
    Submit,
    /// Quit the application.
    Quit,
}
