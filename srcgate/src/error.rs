//! Error types for the srcgate library.
//!
//! This module provides the error hierarchy for every stage of source
//! ingestion, using `thiserror` for ergonomic error handling. The `Display`
//! text of the ingestion variants is the exact diagnostic line shown to the
//! user, so callers can print errors verbatim.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a srcgate error.
///
/// # Examples
///
/// ```
/// use srcgate::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the srcgate library.
#[derive(Debug, Error)]
pub enum Error {
    /// An input path does not exist and missing inputs are not ignored.
    #[error("\"{path}\" is not found.")]
    InputNotFound {
        /// The path exactly as given on the command line.
        path: String,
    },

    /// An input path exists but is not a regular file.
    #[error("\"{path}\" is not a valid file.")]
    NotAValidFile {
        /// The path exactly as given on the command line.
        path: String,
    },

    /// Every input was skipped, so there is nothing to compile.
    #[error("All specified input files either do not exist or are not regular files.")]
    AllInputsSkipped,

    /// Standard JSON mode received more than one input.
    #[error(
        "Too many input files for --standard-json.\n\
         Please either specify a single file name or provide its content on standard input."
    )]
    TooManyInputs,

    /// A remapping was passed on the command line in Standard JSON mode.
    #[error(
        "Import remappings are not accepted on the command line in Standard JSON mode.\n\
         Please put them under 'settings.remappings' in the JSON input."
    )]
    RemappingNotAllowed,

    /// A remapping argument does not follow `[context:]prefix=target`.
    #[error("Invalid remapping: \"{remapping}\".")]
    InvalidRemapping {
        /// The offending argument.
        remapping: String,
    },

    /// Compiler mode was given neither a file nor `-`.
    #[error(
        "No input files given. If you wish to use the standard input please specify \"-\" explicitly."
    )]
    NoInputFiles,

    /// An input passed every check but reading its content failed.
    #[error("\"{path}\" could not be read: {source}.")]
    UnreadableInput {
        /// The path exactly as given on the command line.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// YAML serialization or deserialization failed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },
}

impl Error {
    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcgate::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Check if this error is one of the fatal ingestion outcomes a caller
    /// reports as a failed compilation rather than an internal fault.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcgate::Error;
    ///
    /// assert!(Error::AllInputsSkipped.is_ingestion_failure());
    /// assert!(!Error::Validation { field: "x".into(), message: "y".into() }.is_ingestion_failure());
    /// ```
    #[must_use]
    pub fn is_ingestion_failure(&self) -> bool {
        matches!(
            self,
            Self::InputNotFound { .. }
                | Self::NotAValidFile { .. }
                | Self::AllInputsSkipped
                | Self::TooManyInputs
                | Self::RemappingNotAllowed
                | Self::InvalidRemapping { .. }
                | Self::NoInputFiles
                | Self::UnreadableInput { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_not_found_message() {
        let err = Error::InputNotFound {
            path: "/tmp/x/input.sol".to_string(),
        };
        assert_eq!(err.to_string(), "\"/tmp/x/input.sol\" is not found.");
    }

    #[test]
    fn test_not_a_valid_file_message() {
        let err = Error::NotAValidFile {
            path: "/tmp/x".to_string(),
        };
        assert_eq!(err.to_string(), "\"/tmp/x\" is not a valid file.");
    }

    #[test]
    fn test_too_many_inputs_message() {
        assert_eq!(
            Error::TooManyInputs.to_string(),
            "Too many input files for --standard-json.\n\
             Please either specify a single file name or provide its content on standard input."
        );
    }

    #[test]
    fn test_remapping_not_allowed_message() {
        let display = Error::RemappingNotAllowed.to_string();
        assert!(display.starts_with("Import remappings are not accepted"));
        assert!(display.ends_with("in the JSON input."));
        assert_eq!(display.lines().count(), 2);
    }

    #[test]
    fn test_invalid_remapping_message() {
        let err = Error::InvalidRemapping {
            remapping: "a=".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid remapping: \"a=\".");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_is_not_found() {
        let err = Error::PathNotFound {
            path: PathBuf::from("/missing"),
        };
        assert!(err.is_not_found());
        assert!(!Error::AllInputsSkipped.is_not_found());
    }

    #[test]
    fn test_ingestion_failure_classification() {
        assert!(Error::TooManyInputs.is_ingestion_failure());
        assert!(Error::NoInputFiles.is_ingestion_failure());
        assert!(!Error::PermissionDenied {
            path: PathBuf::from("/root")
        }
        .is_ingestion_failure());
    }
}
