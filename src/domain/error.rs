//! Error types for the showroom crate.
//!
//! This module defines the centralized error type [`ShowroomError`] and a type alias
//! [`Result`] used at the fallible edges of the crate: catalog loading, configuration
//! parsing, theme loading and log file setup. The query path itself never fails;
//! unknown filter values and ids degrade to "no effect" instead.

use thiserror::Error;

/// The main error type for showroom operations.
///
/// # Examples
///
/// ```
/// use showroom::ShowroomError;
///
/// fn validate() -> Result<(), ShowroomError> {
///     Err(ShowroomError::Catalog("duplicate vehicle id: 3".to_string()))
/// }
///
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum ShowroomError {
    /// The vehicle catalog could not be built.
    ///
    /// Raised by catalog validation (duplicate ids, blank brand or model,
    /// implausible model year) before any query runs.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when a configuration file is malformed or names an unsupported
    /// catalog format.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A TOML or JSON document could not be deserialized.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for ShowroomError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for ShowroomError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// A specialized `Result` type for showroom operations.
pub type Result<T> = std::result::Result<T, ShowroomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn open_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here.toml")?)
        }

        let err = open_missing().unwrap_err();
        assert!(matches!(err, ShowroomError::Io(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }

    #[test]
    fn parse_errors_keep_the_deserializer_message() {
        let err: ShowroomError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, ShowroomError::Parse(ref msg) if !msg.is_empty()));
    }
}
