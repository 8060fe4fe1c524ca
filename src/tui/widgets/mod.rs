//! Reusable TUI widgets.

pub mod country_picker;
pub mod form;
pub mod status_bar;

pub use country_picker::{CountryPicker, PickerEvent, draw_country_picker};
pub use form::{Form, FormField, cycle_focus, draw_form};
pub use status_bar::{StatusBarContext, draw_status_bar};
