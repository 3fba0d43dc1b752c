//! Tests for submitting a registration session
//!
//! These tests verify:
//! - Teams of every allowed size reach Success with one payload per submit
//! - The payload mirrors the form after normalization
//! - The event title chosen by the page reaches the payload and the confirmation
//! - A single invalid field blocks the backend and is reported under its key
//! - Stubbed deliveries are flagged for the advisory notice
//! - Failed deliveries can be retried with the same form

use brainium::{
    error::{FieldError, SubmissionError},
    registration::{FieldKey, MemberField, SubmissionState},
};
use brainium_test_utils::builder::leader;
use chrono::Utc;

use super::*;

#[tokio::test]
async fn test_every_team_size_submits() {
    for size in 2..=4 {
        let backend = MockBackend::dispatching();
        let mut session = RegistrationBuilder::new()
            .with_team_size(size)
            .build()
            .expect("Failed to build session");

        let state = session.submit(&backend, Utc::now(), &mut rand::rng()).await;

        assert!(
            matches!(state, SubmissionState::Success(_)),
            "Team of {} did not submit: {:?}",
            size,
            state
        );
        let submitted = backend.submitted();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].team_size, size);
        assert_eq!(submitted[0].members.len(), size - 1);
    }
}

#[tokio::test]
async fn test_payload_is_normalized() {
    let backend = MockBackend::dispatching();
    let mut session = RegistrationBuilder::new()
        .with_field(leader(MemberField::InstitutionalId), "1by23ai045")
        .with_field(leader(MemberField::Phone), "+91 98765 43210")
        .build()
        .expect("Failed to build session");

    let state = session
        .submit(&backend, factory::submitted_at(), &mut rand::rng())
        .await;
    assert!(matches!(state, SubmissionState::Success(_)), "{:?}", state);

    let payload = &backend.submitted()[0];
    assert_eq!(payload.leader.institutional_id, "1BY23AI045");
    // Only the first ten digits are kept, the country code is not stripped
    assert_eq!(payload.leader.phone, "9198765432");
    assert_eq!(payload.leader, {
        let mut expected = factory::leader_dto();
        expected.phone = "9198765432".to_string();
        expected
    });
    assert_eq!(payload.members[0], factory::member_dto(0));
}

#[tokio::test]
async fn test_event_title_reaches_payload_and_confirmation() {
    let backend = MockBackend::dispatching();
    let mut session = RegistrationBuilder::new()
        .with_event_title("Machine Learning Workshop")
        .build()
        .expect("Failed to build session");

    let state = session.submit(&backend, Utc::now(), &mut rand::rng()).await;

    match state {
        SubmissionState::Success(receipt) => {
            assert_eq!(receipt.confirmation.event_title, "Machine Learning Workshop")
        }
        other => panic!("Expected success, got {:?}", other),
    }
    assert_eq!(backend.submitted()[0].event_title, "Machine Learning Workshop");
}

#[tokio::test]
async fn test_invalid_member_email_blocks_submission() {
    let backend = MockBackend::dispatching();
    let mut session = RegistrationBuilder::new()
        .with_team_size(3)
        .with_field(FieldKey::Member(1, MemberField::Email), "not-an-email")
        .build()
        .expect("Failed to build session");

    let state = session.submit(&backend, Utc::now(), &mut rand::rng()).await;

    assert_eq!(
        state,
        &SubmissionState::Error(SubmissionError::Validation { failures: 1 })
    );
    assert_eq!(backend.submit_calls(), 0);

    let errors = session.form().errors();
    assert_eq!(errors.len(), 1);
    let (key, error) = errors.iter().next().expect("Expected one error");
    assert_eq!(key.to_string(), "member1Email");
    assert!(matches!(error, FieldError::InvalidFormat { .. }));
}

#[tokio::test]
async fn test_blank_team_name_blocks_submission() {
    let backend = MockBackend::dispatching();
    let mut session = RegistrationBuilder::new()
        .with_team_name("   ")
        .build()
        .expect("Failed to build session");

    session.submit(&backend, Utc::now(), &mut rand::rng()).await;

    assert_eq!(
        session.form().error(FieldKey::TeamName),
        Some(&FieldError::Required("Team name"))
    );
    assert_eq!(backend.submit_calls(), 0);
}

#[tokio::test]
async fn test_stubbed_delivery_flags_advisory() {
    let backend = MockBackend::stubbed();
    let mut session = RegistrationBuilder::new()
        .build()
        .expect("Failed to build session");

    let state = session.submit(&backend, Utc::now(), &mut rand::rng()).await;

    match state {
        SubmissionState::Success(receipt) => assert!(receipt.needs_advisory()),
        other => panic!("Expected success, got {:?}", other),
    }
}

#[tokio::test]
async fn test_retry_after_transport_failure() {
    let backend = MockBackend::dispatching()
        .then_submit(Err(brainium::error::BackendError::Transport(
            "network unreachable".to_string(),
        )));
    let mut session = RegistrationBuilder::new()
        .build()
        .expect("Failed to build session");

    let state = session.submit(&backend, Utc::now(), &mut rand::rng()).await;
    assert!(matches!(
        state,
        SubmissionState::Error(SubmissionError::Transport(_))
    ));

    let state = session.submit(&backend, Utc::now(), &mut rand::rng()).await;
    assert!(matches!(state, SubmissionState::Success(_)));

    // Each attempt carries a fresh registration ID
    let submitted = backend.submitted();
    assert_eq!(submitted.len(), 2);
    assert_ne!(submitted[0].registration_id, submitted[1].registration_id);
}

#[tokio::test]
async fn test_payload_json_uses_wire_keys() {
    let backend = MockBackend::dispatching();
    let mut session = RegistrationBuilder::new()
        .build()
        .expect("Failed to build session");

    session.submit(&backend, Utc::now(), &mut rand::rng()).await;

    let json = serde_json::to_value(&backend.submitted()[0]).expect("Failed to serialize");
    for key in [
        "registrationId",
        "submittedAt",
        "eventTitle",
        "teamName",
        "teamSize",
        "leader",
        "members",
    ] {
        assert!(json.get(key).is_some(), "Missing key {}", key);
    }
    assert_eq!(json["leader"]["usn"], "1BY23AI045");
    assert_eq!(json["leader"]["semester"], 1);
}
