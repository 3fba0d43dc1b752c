use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Semesters eligible for registration.
///
/// Serialized on the wire as the bare semester number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Semester {
    First,
    Third,
    Fifth,
}

impl Semester {
    pub const ALL: [Semester; 3] = [Semester::First, Semester::Third, Semester::Fifth];

    pub fn number(self) -> u8 {
        match self {
            Semester::First => 1,
            Semester::Third => 3,
            Semester::Fifth => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Semester::First => "1st Semester",
            Semester::Third => "3rd Semester",
            Semester::Fifth => "5th Semester",
        }
    }

    /// Parses the value of a semester `<select>` option, e.g. `"3"`.
    pub fn parse(value: &str) -> Option<Self> {
        value
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(|n| Self::try_from(n).ok())
    }
}

impl From<Semester> for u8 {
    fn from(semester: Semester) -> Self {
        semester.number()
    }
}

impl TryFrom<u8> for Semester {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Semester::First),
            3 => Ok(Semester::Third),
            5 => Ok(Semester::Fifth),
            other => Err(format!("unsupported semester {}", other)),
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// One team member as sent to the form-processing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub name: String,
    pub semester: Semester,
    #[serde(rename = "usn")]
    pub institutional_id: String,
    pub email: String,
    pub phone: String,
}

/// Registration payload posted to the form-processing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDto {
    pub registration_id: String,
    pub submitted_at: DateTime<Utc>,
    pub event_title: String,
    pub team_name: String,
    pub team_size: usize,
    pub leader: MemberDto,
    /// Non-leader members, always `team_size - 1` entries
    pub members: Vec<MemberDto>,
}

/// Document encoded into the confirmation QR code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationDto {
    pub registration_id: String,
    pub event_title: String,
    pub team_name: String,
    pub leader_name: String,
    pub timestamp: DateTime<Utc>,
}

impl From<&RegistrationDto> for ConfirmationDto {
    fn from(registration: &RegistrationDto) -> Self {
        Self {
            registration_id: registration.registration_id.clone(),
            event_title: registration.event_title.clone(),
            team_name: registration.team_name.clone(),
            leader_name: registration.leader.name.clone(),
            timestamp: registration.submitted_at,
        }
    }
}
