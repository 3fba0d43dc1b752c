//! Tests for resolving the participant count and the registration status
//!
//! These tests verify:
//! - Counts reported by the endpoint are applied
//! - Unreachable or unconfigured endpoints fall back to the assumed count
//! - `success: false` keeps the previously displayed count
//! - The resolved count drives the open/full/closed decision

use brainium::{
    error::BackendError,
    model::{api::ParticipantCountDto, event::FEATURED_EVENT},
    registration::{
        backend::{refresh_participant_count, ASSUMED_PARTICIPANT_COUNT},
        status::{registration_status, spots_remaining},
        CountUpdate, RegistrationStatus,
    },
};
use chrono::Duration;

use super::*;

#[tokio::test]
async fn test_reported_count_is_applied() {
    let backend = MockBackend::dispatching().with_participant_count(42);

    let update = refresh_participant_count(&backend).await;

    assert_eq!(update, CountUpdate::Fetched(42));
    assert_eq!(update.apply(0), 42);
    assert!(!update.raises_advisory());
    assert_eq!(backend.count_requests(), 1);
}

#[tokio::test]
async fn test_unconfigured_endpoint_uses_assumed_count() {
    let backend = MockBackend::stubbed();

    let update = refresh_participant_count(&backend).await;

    assert_eq!(update.apply(0), ASSUMED_PARTICIPANT_COUNT);
    assert!(update.raises_advisory());
}

#[tokio::test]
async fn test_parse_failure_uses_assumed_count() {
    let backend = MockBackend::dispatching()
        .with_count_response(Err(BackendError::Parse("expected value".to_string())));

    let update = refresh_participant_count(&backend).await;

    assert_eq!(update, CountUpdate::Fallback(ASSUMED_PARTICIPANT_COUNT));
}

#[tokio::test]
async fn test_unsuccessful_response_keeps_previous_count() {
    let backend = MockBackend::dispatching().with_count_response(Ok(ParticipantCountDto {
        success: false,
        participant_count: 0,
    }));

    let update = refresh_participant_count(&backend).await;

    assert_eq!(update.apply(87), 87);
    assert!(!update.raises_advisory());
}

#[tokio::test]
async fn test_full_event_blocks_registration() {
    let max = FEATURED_EVENT.max_participants;
    let backend = MockBackend::dispatching().with_participant_count(max);
    let deadline = FEATURED_EVENT.deadline().expect("Deadline should parse");

    let registered = refresh_participant_count(&backend).await.apply(0);

    assert_eq!(
        registration_status(deadline - Duration::days(1), deadline, registered, max),
        RegistrationStatus::Full
    );
    assert_eq!(spots_remaining(registered, max), 0);
}

#[tokio::test]
async fn test_fallback_count_leaves_registration_open() {
    let max = FEATURED_EVENT.max_participants;
    let backend = MockBackend::failing("offline")
        .with_count_response(Err(BackendError::Transport("offline".to_string())));
    let deadline = FEATURED_EVENT.deadline().expect("Deadline should parse");

    let registered = refresh_participant_count(&backend).await.apply(0);

    assert_eq!(
        registration_status(deadline - Duration::hours(1), deadline, registered, max),
        RegistrationStatus::Open
    );
    assert_eq!(spots_remaining(registered, max), max - ASSUMED_PARTICIPANT_COUNT);
}
