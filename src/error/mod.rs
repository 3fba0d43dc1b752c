//! Error types for the Brainium website.
//!
//! Errors are split by concern: field validation, form mutation, endpoint configuration,
//! backend transport, submission orchestration, and confirmation rendering. None of them is
//! fatal to the page; each is surfaced to the user as inline feedback, a banner, or the
//! advisory notice, and the user can always retry or navigate away.

pub mod backend;
pub mod config;
pub mod confirmation;
pub mod field;
pub mod form;
pub mod submission;

pub use backend::BackendError;
pub use config::ConfigError;
pub use confirmation::ConfirmationError;
pub use field::FieldError;
pub use form::FormError;
pub use submission::SubmissionError;
