//! Error types for the configurator
//!
//! The configuration core (resolver, code generator, summary compiler) is
//! total and never fails. These errors cover the edges around it: reading
//! selection files, parsing command-line field assignments, loading
//! settings and gating wizard navigation.

use crate::io::ExitCode;
use std::path::PathBuf;
use thiserror::Error;

/// What the CLI needs to report an error: a stable code, hints and an exit code
pub trait ErrorReport: std::error::Error {
    /// Get a stable status code for this error type.
    ///
    /// Returns a string identifier that can be used in JSON responses
    /// for programmatic error handling.
    fn status_code(&self) -> String;

    /// Get recovery suggestions for this error
    fn recovery_suggestions(&self) -> Vec<&'static str>;

    /// Semantic exit code for scripts
    fn exit_code(&self) -> ExitCode;
}

/// Errors raised while loading or editing a selection
#[derive(Error, Debug)]
pub enum ConfiguratorError {
    /// File system errors
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Decoding errors
    #[error("Failed to decode {format} selection '{path}': {reason}")]
    Decode {
        path: PathBuf,
        format: &'static str,
        reason: String,
    },

    #[error("Unsupported file type '{extension}' for file '{path}'. Supported types: .toml, .json")]
    UnsupportedFileType { path: PathBuf, extension: String },

    /// Field assignment errors
    #[error("Expected 'field=value', got '{input}'")]
    MalformedAssignment { input: String },

    #[error("Unknown field '{field}'")]
    UnknownField { field: String },

    #[error("Invalid value '{value}' for field '{field}'. Expected {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    /// Configuration errors
    #[error("Invalid configuration: {reason}")]
    ConfigError { reason: String },
}

impl ErrorReport for ConfiguratorError {
    fn status_code(&self) -> String {
        match self {
            Self::FileRead { .. } => "FILE_READ_ERROR",
            Self::FileWrite { .. } => "FILE_WRITE_ERROR",
            Self::Decode { .. } => "DECODE_ERROR",
            Self::UnsupportedFileType { .. } => "UNSUPPORTED_FILE_TYPE",
            Self::MalformedAssignment { .. } => "MALFORMED_ASSIGNMENT",
            Self::UnknownField { .. } => "UNKNOWN_FIELD",
            Self::InvalidValue { .. } => "INVALID_VALUE",
            Self::ConfigError { .. } => "CONFIG_ERROR",
        }
        .to_string()
    }

    fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::FileRead { .. } => vec![
                "Check that the file exists and you have read permissions",
                "Paths are resolved relative to the current directory",
            ],
            Self::FileWrite { .. } => vec![
                "Check that you have write permissions in the target directory",
                "Use 'vibconf init --force' to overwrite an existing settings file",
            ],
            Self::Decode { .. } => vec![
                "Enumerated fields use their display labels, e.g. contactType = \"Non-Contact\"",
                "Leave a field out (or set it to \"\") to keep it unset",
            ],
            Self::UnsupportedFileType { .. } => vec![
                "Save the selection as .toml or .json",
            ],
            Self::MalformedAssignment { .. } | Self::UnknownField { .. } => vec![
                "Use --set field=value, e.g. --set area=Safe",
                "Attribute fields use their camelCase names, e.g. --set threadSize=M1",
                "VM-7 module counts use vm7.<module>, e.g. --set vm7.vm701=2",
            ],
            Self::InvalidValue { .. } => vec![
                "Labels are case-sensitive and must match the catalog exactly",
                "Run 'vibconf options' to list the values offered at each step",
            ],
            Self::ConfigError { .. } => vec![
                "Check .vibconf/settings.toml for syntax errors",
                "Run 'vibconf config' to see the effective settings",
            ],
        }
    }

    fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileRead { .. } | Self::FileWrite { .. } => ExitCode::IoError,
            Self::Decode { .. }
            | Self::MalformedAssignment { .. }
            | Self::UnknownField { .. }
            | Self::InvalidValue { .. } => ExitCode::ParseError,
            Self::UnsupportedFileType { .. } => ExitCode::UnsupportedOperation,
            Self::ConfigError { .. } => ExitCode::ConfigError,
        }
    }
}

/// Errors raised by wizard navigation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("Project details incomplete, missing: {}", missing.join(", "))]
    IncompleteProjectDetails { missing: Vec<String> },

    #[error("Step {step} does not exist. Steps are numbered 1 to {last}")]
    StepOutOfRange { step: usize, last: usize },
}

impl ErrorReport for WizardError {
    fn status_code(&self) -> String {
        match self {
            Self::IncompleteProjectDetails { .. } => "INCOMPLETE_PROJECT_DETAILS",
            Self::StepOutOfRange { .. } => "STEP_OUT_OF_RANGE",
        }
        .to_string()
    }

    fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::IncompleteProjectDetails { .. } => vec![
                "Fill in every required project field before moving past step 1",
                "Required fields are configured under [wizard] in .vibconf/settings.toml",
            ],
            Self::StepOutOfRange { .. } => vec![],
        }
    }

    fn exit_code(&self) -> ExitCode {
        match self {
            // Navigation cannot continue until the details are filled in
            Self::IncompleteProjectDetails { .. } => ExitCode::BlockingError,
            Self::StepOutOfRange { .. } => ExitCode::UnsupportedOperation,
        }
    }
}

/// Result type alias for selection operations
pub type ConfiguratorResult<T> = Result<T, ConfiguratorError>;

/// Result type alias for wizard navigation
pub type WizardResult<T> = Result<T, WizardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_are_stable() {
        let err = ConfiguratorError::UnknownField {
            field: "colour".to_string(),
        };
        assert_eq!(err.status_code(), "UNKNOWN_FIELD");
        assert!(!err.recovery_suggestions().is_empty());

        let err = WizardError::IncompleteProjectDetails {
            missing: vec!["email".to_string(), "branch".to_string()],
        };
        assert_eq!(err.status_code(), "INCOMPLETE_PROJECT_DETAILS");
        assert_eq!(
            err.to_string(),
            "Project details incomplete, missing: email, branch"
        );
        assert_eq!(err.exit_code(), ExitCode::BlockingError);
    }

    #[test]
    fn test_exit_codes() {
        let err = ConfiguratorError::FileRead {
            path: PathBuf::from("missing.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.exit_code(), ExitCode::IoError);

        let err = ConfiguratorError::UnsupportedFileType {
            path: PathBuf::from("selection.yaml"),
            extension: "yaml".to_string(),
        };
        assert_eq!(err.exit_code(), ExitCode::UnsupportedOperation);

        let err = ConfiguratorError::MalformedAssignment {
            input: "area".to_string(),
        };
        assert_eq!(err.exit_code(), ExitCode::ParseError);
    }

    #[test]
    fn test_invalid_value_message() {
        let err = ConfiguratorError::InvalidValue {
            field: "area".to_string(),
            value: "safe".to_string(),
            expected: "one of: Safe, Hazardous".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value 'safe' for field 'area'. Expected one of: Safe, Hazardous"
        );
    }
}
