use thiserror::Error;

/// Failure of a single field validator.
///
/// Carries the human readable label of the field so the message can be shown inline next
/// to the input without further formatting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },
    #[error("{0} may only contain letters and spaces")]
    LettersOnly(&'static str),
    #[error("{field} is invalid, expected {hint}")]
    InvalidFormat {
        field: &'static str,
        hint: &'static str,
    },
}
