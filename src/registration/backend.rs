//! Seam between the registration flow and the external form-processing endpoint.

use async_trait::async_trait;
use dioxus_logger::tracing;

use crate::{
    error::BackendError,
    model::{api::ParticipantCountDto, registration::RegistrationDto},
};

/// Participant count assumed when the endpoint cannot be reached.
pub const ASSUMED_PARTICIPANT_COUNT: u32 = 5;

/// How a submission left the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The request was handed to the network without a transport error.
    ///
    /// Delivery is unconfirmed: the endpoint's response body is never read.
    Dispatched,
    /// No endpoint is configured, nothing was sent.
    Stubbed,
}

/// Access to the external form-processing endpoint.
///
/// Futures are not required to be `Send` since browser fetches are bound to the main thread.
#[async_trait(?Send)]
pub trait RegistrationBackend {
    /// Sends one registration.
    ///
    /// # Returns
    /// - `Ok(Delivery::Dispatched)` - Request sent
    /// - `Ok(Delivery::Stubbed)` - No endpoint configured, request skipped
    /// - `Err(BackendError::Transport)` - The request could not be sent
    async fn submit(&self, registration: &RegistrationDto) -> Result<Delivery, BackendError>;

    /// Fetches the number of teams registered so far.
    ///
    /// # Returns
    /// - `Ok(ParticipantCountDto)` - Endpoint answered with the expected document
    /// - `Err(BackendError::NotConfigured)` - No endpoint configured
    /// - `Err(BackendError::Transport | Parse)` - Request or decoding failed
    async fn participant_count(&self) -> Result<ParticipantCountDto, BackendError>;
}

/// Outcome of one participant count refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountUpdate {
    /// The endpoint reported this count.
    Fetched(u32),
    /// The endpoint answered with `success: false`, keep the previous count.
    Unchanged,
    /// The endpoint is missing or failed, use the assumed count and raise the advisory.
    Fallback(u32),
}

impl CountUpdate {
    pub fn from_response(response: Result<ParticipantCountDto, BackendError>) -> Self {
        match response {
            Ok(dto) if dto.success => CountUpdate::Fetched(dto.participant_count),
            Ok(_) => CountUpdate::Unchanged,
            Err(_) => CountUpdate::Fallback(ASSUMED_PARTICIPANT_COUNT),
        }
    }

    /// Count to display after applying this update to `current`.
    pub fn apply(self, current: u32) -> u32 {
        match self {
            CountUpdate::Fetched(count) | CountUpdate::Fallback(count) => count,
            CountUpdate::Unchanged => current,
        }
    }

    pub fn raises_advisory(self) -> bool {
        matches!(self, CountUpdate::Fallback(_))
    }
}

/// Queries the participant count and resolves failures to the assumed count.
pub async fn refresh_participant_count<B>(backend: &B) -> CountUpdate
where
    B: RegistrationBackend + ?Sized,
{
    let response = backend.participant_count().await;

    match &response {
        Ok(dto) if !dto.success => {
            tracing::warn!("Participant count endpoint reported failure, keeping previous count")
        }
        Err(BackendError::NotConfigured) => {
            tracing::debug!("Registration endpoint not configured, using assumed participant count")
        }
        Err(err) => tracing::error!("Failed to fetch participant count: {}", err),
        Ok(_) => (),
    }

    CountUpdate::from_response(response)
}
