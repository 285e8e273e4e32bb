use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts tell a finished session apart from one the user
/// left early or one that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the requested location was fully rendered
    Success = 0,
    /// The wizard was left before the assessment was created
    Incomplete = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::Incomplete => write!(f, "Incomplete (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the assessment client.
///
/// The two backend failures carry the exact messages shown to the user;
/// transport details only go to the diagnostic log.
#[derive(Debug, Error)]
pub enum SentinelError {
    #[error("Failed to create assessment")]
    CreateAssessmentFailed,

    #[error("Failed to fetch assessment")]
    FetchAssessmentFailed,

    #[error("Invalid location: {location}\nReason: {reason}\n\n💡 Hint: Locations look like /name, /role?name=Acme or /assessments/<id>?role=security")]
    InvalidLocation { location: String, reason: String },

    #[error("Assessment answers are incomplete: {missing} has not been answered")]
    IncompleteAnswers { missing: String },

    #[error("Invalid assessment id: {id}\nReason: {reason}")]
    InvalidAssessmentId { id: String, reason: String },

    /// Validation error for configuration and CLI values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
