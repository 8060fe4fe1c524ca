//! TUI screen implementations.

pub mod application;
pub mod help;

pub use application::{ApplicationState, draw_application};
pub use help::{HelpState, draw_help};
