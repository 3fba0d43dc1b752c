//! Team registration for the featured event.
//!
//! This module holds the UI independent core of the registration flow:
//!
//! - [`validation`] - pure field validators selected by [`validation::FieldKind`]
//! - [`form`] - the form state container scoped to one modal session
//! - [`submission`] - the submission state machine driving a [`backend::RegistrationBackend`]
//! - [`confirmation`] - QR code rendering of a successful registration
//! - [`status`] - open/closed/full decision and capacity arithmetic
//! - [`advisory`] - the auto-dismissing "backend not connected" notice

pub mod advisory;
pub mod backend;
pub mod confirmation;
pub mod form;
pub mod id;
pub mod status;
pub mod submission;
pub mod validation;

#[cfg(test)]
mod tests;

pub use advisory::AdvisoryNotice;
pub use backend::{CountUpdate, Delivery, RegistrationBackend};
pub use form::{FieldKey, MemberField, RegistrationForm};
pub use status::RegistrationStatus;
pub use submission::{RegistrationSession, SubmissionReceipt, SubmissionState};
