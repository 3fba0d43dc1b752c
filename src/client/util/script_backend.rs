//! Registration backend talking to the configured form-processing script over HTTP.

use async_trait::async_trait;
use dioxus_logger::tracing;

use crate::{
    config::Config,
    error::BackendError,
    model::{api::ParticipantCountDto, registration::RegistrationDto},
    registration::{Delivery, RegistrationBackend},
};

/// Content type accepted by a no-cors request without a preflight.
#[cfg_attr(not(feature = "web"), allow(dead_code))]
const SUBMIT_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptBackend {
    script_url: Option<String>,
}

impl ScriptBackend {
    pub fn new(config: &Config) -> Self {
        Self {
            script_url: config.script_url.clone(),
        }
    }
}

#[async_trait(?Send)]
impl RegistrationBackend for ScriptBackend {
    async fn submit(&self, registration: &RegistrationDto) -> Result<Delivery, BackendError> {
        let Some(url) = self.script_url.as_deref() else {
            tracing::warn!(
                "No registration endpoint configured, registration {} is not sent",
                registration.registration_id
            );
            return Ok(Delivery::Stubbed);
        };

        let body = serde_json::to_string(registration)
            .map_err(|e| BackendError::Transport(format!("Failed to encode registration: {}", e)))?;

        post_registration(url, body).await?;

        Ok(Delivery::Dispatched)
    }

    async fn participant_count(&self) -> Result<ParticipantCountDto, BackendError> {
        let url = self
            .script_url
            .as_deref()
            .ok_or(BackendError::NotConfigured)?;

        get_participant_count(url).await
    }
}

/// Send a registration without reading the (opaque) response
#[cfg(feature = "web")]
async fn post_registration(url: &str, body: String) -> Result<(), BackendError> {
    use reqwasm::http::{Request, RequestMode};

    Request::post(url)
        .mode(RequestMode::NoCors)
        .header("Content-Type", SUBMIT_CONTENT_TYPE)
        .body(body)
        .send()
        .await
        .map_err(|e| BackendError::Transport(e.to_string()))?;

    Ok(())
}

/// Retrieve the participant count from the endpoint
#[cfg(feature = "web")]
async fn get_participant_count(url: &str) -> Result<ParticipantCountDto, BackendError> {
    use reqwasm::http::Request;

    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| BackendError::Transport(e.to_string()))?;

    match response.status() {
        200 => response
            .json::<ParticipantCountDto>()
            .await
            .map_err(|e| BackendError::Parse(e.to_string())),
        status => Err(BackendError::Transport(format!(
            "Request failed with status {}",
            status
        ))),
    }
}

#[cfg(not(feature = "web"))]
async fn post_registration(_url: &str, _body: String) -> Result<(), BackendError> {
    Err(BackendError::Transport(
        "HTTP requests require the web feature".to_string(),
    ))
}

#[cfg(not(feature = "web"))]
async fn get_participant_count(_url: &str) -> Result<ParticipantCountDto, BackendError> {
    Err(BackendError::Transport(
        "HTTP requests require the web feature".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::model::registration::{MemberDto, Semester};

    fn registration() -> RegistrationDto {
        let leader = MemberDto {
            name: "John Smith".to_string(),
            semester: Semester::First,
            institutional_id: "1BY23AI045".to_string(),
            email: "john@x.com".to_string(),
            phone: "9876543210".to_string(),
        };

        RegistrationDto {
            registration_id: "BRA-1-2".to_string(),
            submitted_at: Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap(),
            event_title: "AI Innovation Summit 2026".to_string(),
            team_name: "Team Alpha".to_string(),
            team_size: 2,
            leader: leader.clone(),
            members: vec![leader],
        }
    }

    #[tokio::test]
    async fn test_unconfigured_submit_is_stubbed() {
        let backend = ScriptBackend::new(&Config::default());

        let delivery = backend.submit(&registration()).await;

        assert_eq!(delivery, Ok(Delivery::Stubbed));
    }

    #[tokio::test]
    async fn test_unconfigured_count_reports_not_configured() {
        let backend = ScriptBackend::new(&Config::default());

        let count = backend.participant_count().await;

        assert_eq!(count, Err(BackendError::NotConfigured));
    }
}
