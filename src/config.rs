//! Runtime configuration read from the environment.

use std::path::PathBuf;

use crate::model::ValidationMode;

/// Overrides the directory log files are written to.
pub const LOG_DIR_VAR: &str = "MARSFORM_LOG_DIR";
/// Selects the validation mode (`touched` or `eager`).
pub const VALIDATION_VAR: &str = "MARSFORM_VALIDATION";
/// `EnvFilter` directives for the log file.
pub const LOG_FILTER_VAR: &str = "MARSFORM_LOG";

const DEFAULT_LOG_FILTER: &str = "marsform=info";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The platform does not provide a data directory and no override was set.
    #[error("could not determine data directory; set {LOG_DIR_VAR}")]
    NoDataDir,

    /// The validation mode is neither `touched` nor `eager`.
    #[error("invalid {VALIDATION_VAR} value {0:?}; expected \"touched\" or \"eager\"")]
    InvalidValidationMode(String),
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_dir: PathBuf,
    pub log_filter: String,
    pub validation: ValidationMode,
}

impl Config {
    /// Loads configuration from the process environment.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration using `lookup` to resolve variable names.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_dir = match lookup(LOG_DIR_VAR).filter(|dir| !dir.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => default_log_dir()?,
        };

        let log_filter = lookup(LOG_FILTER_VAR)
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let validation = match lookup(VALIDATION_VAR) {
            Some(raw) => raw
                .parse::<ValidationMode>()
                .map_err(ConfigError::InvalidValidationMode)?,
            None => ValidationMode::default(),
        };

        Ok(Self {
            log_dir,
            log_filter,
            validation,
        })
    }
}

/// Returns `$XDG_DATA_HOME/marsform/logs` or the platform equivalent.
fn default_log_dir() -> Result<PathBuf, ConfigError> {
    let data = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
    Ok(data.join("marsform").join("logs"))
}
