
use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    error::BackendError,
    model::{api::ParticipantCountDto, registration::RegistrationDto},
    registration::{
        backend::{Delivery, RegistrationBackend},
        form::MemberField,
        submission::RegistrationSession,
    },
};

const EVENT_TITLE: &str = "AI Innovation Summit 2026";

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(2026)
}

/// Session holding a valid team of two.
fn valid_session() -> RegistrationSession {
    let mut session = RegistrationSession::new(EVENT_TITLE);
    let form = session.form_mut();

    form.set_team_name("Team Alpha");
    form.set_leader_field(MemberField::Name, "John Smith");
    form.set_leader_field(MemberField::Semester, "3");
    form.set_leader_field(MemberField::InstitutionalId, "1BY23AI045");
    form.set_leader_field(MemberField::Email, "john@x.com");
    form.set_leader_field(MemberField::Phone, "9876543210");

    form.set_member_field(0, MemberField::Name, "Jane Doe").unwrap();
    form.set_member_field(0, MemberField::Semester, "3").unwrap();
    form.set_member_field(0, MemberField::InstitutionalId, "1TD23AI046")
        .unwrap();
    form.set_member_field(0, MemberField::Email, "jane@x.com")
        .unwrap();
    form.set_member_field(0, MemberField::Phone, "8765432109")
        .unwrap();

    session
}

/// Backend answering every submission with a fixed result.
struct FakeBackend {
    result: Result<Delivery, BackendError>,
    calls: Cell<usize>,
    payloads: RefCell<Vec<RegistrationDto>>,
}

impl FakeBackend {
    fn new(result: Result<Delivery, BackendError>) -> Self {
        Self {
            result,
            calls: Cell::new(0),
            payloads: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl RegistrationBackend for FakeBackend {
    async fn submit(&self, registration: &RegistrationDto) -> Result<Delivery, BackendError> {
        self.calls.set(self.calls.get() + 1);
        self.payloads.borrow_mut().push(registration.clone());
        self.result.clone()
    }

    async fn participant_count(&self) -> Result<ParticipantCountDto, BackendError> {
        Err(BackendError::NotConfigured)
    }
}
