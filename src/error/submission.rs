use thiserror::Error;

use crate::error::BackendError;

/// Reasons a submission attempt ended in the error state.
///
/// The display strings are shown in the form-wide error banner, field level details for
/// validation failures are kept on the form itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// Full-form validation found failing fields, no request was made.
    #[error("Please fix the validation errors before submitting ({failures} invalid)")]
    Validation { failures: usize },
    /// A previous submission is still waiting on the network.
    #[error("A submission is already in progress")]
    InProgress,
    /// The outbound request itself failed.
    #[error("Submission failed, please retry. {0}")]
    Transport(#[from] BackendError),
}
