//! Submission state machine for one registration modal session.
//!
//! ```text
//! Idle ──submit──▶ Validating ──invalid──▶ Error
//!                      │                     │
//!                      ▼ valid               │ submit (retry)
//!                 Submitting ──transport──▶ Error
//!                      │
//!                      ▼ dispatched / stubbed
//!                   Success
//! ```
//!
//! The transition out of `Submitting` waits on the network, so the flow is split into
//! [`RegistrationSession::prepare_submission`] and [`RegistrationSession::finish_submission`].
//! UI code can release its borrow of the session while the request is in flight;
//! [`RegistrationSession::submit`] chains both for callers that own the session outright.
//!
//! Delivery is at-least-once and unconfirmed: a dispatched request counts as success
//! without reading a response, and nothing guards against the same team registering twice.

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use rand::Rng;

use crate::{
    error::{BackendError, SubmissionError},
    model::registration::{ConfirmationDto, MemberDto, RegistrationDto},
    registration::{
        backend::{Delivery, RegistrationBackend},
        form::RegistrationForm,
        id::generate_registration_id,
    },
};

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub confirmation: ConfirmationDto,
    pub delivery: Delivery,
}

impl SubmissionReceipt {
    pub fn registration_id(&self) -> &str {
        &self.confirmation.registration_id
    }

    /// Stubbed deliveries were never sent, the user is warned with the advisory notice.
    pub fn needs_advisory(&self) -> bool {
        self.delivery == Delivery::Stubbed
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success(SubmissionReceipt),
    Error(SubmissionError),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

/// Form and submission state of one open registration modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationSession {
    event_title: String,
    form: RegistrationForm,
    state: SubmissionState,
}

impl RegistrationSession {
    pub fn new(event_title: impl Into<String>) -> Self {
        Self {
            event_title: event_title.into(),
            form: RegistrationForm::new(),
            state: SubmissionState::Idle,
        }
    }

    pub fn event_title(&self) -> &str {
        &self.event_title
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RegistrationForm {
        &mut self.form
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Validates the form and builds the payload to send.
    ///
    /// On success the session is left in `Submitting` with a freshly generated registration
    /// ID. On validation failure every failing field gets its inline error, the session moves
    /// to `Error` and no payload is produced.
    ///
    /// # Returns
    /// - `Ok(RegistrationDto)` - Payload ready to hand to the backend
    /// - `Err(SubmissionError::InProgress)` - A request is already in flight, state unchanged
    /// - `Err(SubmissionError::Validation)` - One or more fields failed validation
    pub fn prepare_submission<R: Rng>(
        &mut self,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<RegistrationDto, SubmissionError> {
        if self.state.is_submitting() {
            return Err(SubmissionError::InProgress);
        }

        self.state = SubmissionState::Validating;

        let failures = self.form.validate_all();
        if !failures.is_empty() {
            tracing::debug!(
                "Registration blocked by {} invalid field(s): {}",
                failures.len(),
                failures
                    .keys()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            );

            let err = SubmissionError::Validation {
                failures: failures.len(),
            };
            self.form.set_errors(failures);
            self.state = SubmissionState::Error(err.clone());

            return Err(err);
        }

        let payload = match self.build_payload(now, rng) {
            Some(payload) => payload,
            None => {
                let err = SubmissionError::Validation { failures: 1 };
                self.state = SubmissionState::Error(err.clone());
                return Err(err);
            }
        };

        self.form.set_errors(Default::default());
        self.state = SubmissionState::Submitting;

        tracing::info!(
            "Submitting registration {} for team {:?}",
            payload.registration_id,
            payload.team_name
        );

        Ok(payload)
    }

    /// Records the backend's answer for `payload` and moves to `Success` or `Error`.
    pub fn finish_submission(
        &mut self,
        payload: &RegistrationDto,
        result: Result<Delivery, BackendError>,
    ) -> &SubmissionState {
        self.state = match result {
            Ok(delivery) => {
                match delivery {
                    Delivery::Dispatched => {
                        tracing::info!("Registration {} dispatched", payload.registration_id)
                    }
                    Delivery::Stubbed => tracing::warn!(
                        "Registration {} not sent, no endpoint configured",
                        payload.registration_id
                    ),
                }

                SubmissionState::Success(SubmissionReceipt {
                    confirmation: ConfirmationDto::from(payload),
                    delivery,
                })
            }
            Err(err) => {
                tracing::error!(
                    "Failed to submit registration {}: {}",
                    payload.registration_id,
                    err
                );

                SubmissionState::Error(SubmissionError::Transport(err))
            }
        };

        &self.state
    }

    /// Runs a full submission attempt against `backend`.
    ///
    /// No automatic retry is attempted, calling this again from `Error` is the retry.
    pub async fn submit<B, R>(
        &mut self,
        backend: &B,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> &SubmissionState
    where
        B: RegistrationBackend + ?Sized,
        R: Rng,
    {
        let payload = match self.prepare_submission(now, rng) {
            Ok(payload) => payload,
            // The state already reflects why nothing was sent
            Err(_) => return &self.state,
        };

        let result = backend.submit(&payload).await;

        self.finish_submission(&payload, result)
    }

    fn build_payload<R: Rng>(&self, now: DateTime<Utc>, rng: &mut R) -> Option<RegistrationDto> {
        let leader = self.form.leader().to_dto()?;
        let members = self
            .form
            .members()
            .iter()
            .map(|member| member.to_dto())
            .collect::<Option<Vec<MemberDto>>>()?;

        Some(RegistrationDto {
            registration_id: generate_registration_id(now, rng),
            submitted_at: now,
            event_title: self.event_title.clone(),
            team_name: self.form.team_name().trim().to_string(),
            team_size: self.form.team_size(),
            leader,
            members,
        })
    }
}
