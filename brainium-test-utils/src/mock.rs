//! Recording backend double.

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
};

use async_trait::async_trait;
use brainium::{
    error::BackendError,
    model::{api::ParticipantCountDto, registration::RegistrationDto},
    registration::{Delivery, RegistrationBackend},
};

/// Backend that records every call and answers with preconfigured responses.
///
/// Submissions consume queued responses first and fall back to the default response once
/// the queue is empty.
pub struct MockBackend {
    default_submit: Result<Delivery, BackendError>,
    queued_submits: RefCell<VecDeque<Result<Delivery, BackendError>>>,
    count_response: Result<ParticipantCountDto, BackendError>,
    submitted: RefCell<Vec<RegistrationDto>>,
    count_requests: Cell<usize>,
}

impl MockBackend {
    fn with_default(default_submit: Result<Delivery, BackendError>) -> Self {
        Self {
            default_submit,
            queued_submits: RefCell::new(VecDeque::new()),
            count_response: Err(BackendError::NotConfigured),
            submitted: RefCell::new(Vec::new()),
            count_requests: Cell::new(0),
        }
    }

    /// Backend whose submissions are dispatched.
    pub fn dispatching() -> Self {
        Self::with_default(Ok(Delivery::Dispatched))
    }

    /// Backend without a configured endpoint.
    pub fn stubbed() -> Self {
        Self::with_default(Ok(Delivery::Stubbed))
    }

    /// Backend whose submissions fail with a transport error.
    pub fn failing(reason: &str) -> Self {
        Self::with_default(Err(BackendError::Transport(reason.to_string())))
    }

    /// Queue one response ahead of the default submit response.
    pub fn then_submit(self, response: Result<Delivery, BackendError>) -> Self {
        self.queued_submits.borrow_mut().push_back(response);
        self
    }

    /// Answer participant count queries with `count`.
    pub fn with_participant_count(mut self, count: u32) -> Self {
        self.count_response = Ok(ParticipantCountDto {
            success: true,
            participant_count: count,
        });
        self
    }

    pub fn with_count_response(mut self, response: Result<ParticipantCountDto, BackendError>) -> Self {
        self.count_response = response;
        self
    }

    /// Payloads received so far, in call order.
    pub fn submitted(&self) -> Vec<RegistrationDto> {
        self.submitted.borrow().clone()
    }

    pub fn submit_calls(&self) -> usize {
        self.submitted.borrow().len()
    }

    pub fn count_requests(&self) -> usize {
        self.count_requests.get()
    }
}

#[async_trait(?Send)]
impl RegistrationBackend for MockBackend {
    async fn submit(&self, registration: &RegistrationDto) -> Result<Delivery, BackendError> {
        self.submitted.borrow_mut().push(registration.clone());

        self.queued_submits
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| self.default_submit.clone())
    }

    async fn participant_count(&self) -> Result<ParticipantCountDto, BackendError> {
        self.count_requests.set(self.count_requests.get() + 1);
        self.count_response.clone()
    }
}
