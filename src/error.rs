//! Error types for the svgplan CLI.
//!
//! Uses thiserror for derive macros. These errors only cover the process
//! boundary; input resolution, filtering and config parsing report through
//! the string-based algebra in [`crate::outcome`] instead.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for svgplan operations.
#[derive(Error, Debug)]
pub enum PlanError {
    /// User provided invalid arguments or the environment is unusable.
    #[error("{0}")]
    UserError(String),

    /// The action manager reported a hard failure and the run was aborted.
    /// The reporter has already printed it.
    #[error("aborted after a reported failure")]
    Aborted,

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),
}

impl PlanError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PlanError::UserError(_) => exit_codes::USER_ERROR,
            PlanError::Aborted => exit_codes::ACTION_FAILURE,
            PlanError::GitError(_) => exit_codes::GIT_FAILURE,
        }
    }

    /// Whether the user has already seen this error.
    pub fn is_reported(&self) -> bool {
        matches!(self, PlanError::Aborted)
    }
}

/// Result type alias for svgplan operations.
pub type Result<T> = std::result::Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = PlanError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn aborted_is_reported_action_failure() {
        let err = PlanError::Aborted;
        assert_eq!(err.exit_code(), exit_codes::ACTION_FAILURE);
        assert!(err.is_reported());
        assert!(!PlanError::UserError("x".to_string()).is_reported());
    }

    #[test]
    fn git_error_has_correct_exit_code() {
        let err = PlanError::GitError("ls-files failed".to_string());
        assert_eq!(err.exit_code(), exit_codes::GIT_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = PlanError::GitError("diff failed".to_string());
        assert_eq!(err.to_string(), "Git operation failed: diff failed");

        let err = PlanError::UserError("unknown input".to_string());
        assert_eq!(err.to_string(), "unknown input");
    }
}
