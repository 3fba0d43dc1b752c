use serde::{Deserialize, Serialize};

/// Response of the form-processing endpoint to a participant count query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantCountDto {
    /// Whether the endpoint managed to read its registration sheet
    pub success: bool,
    /// Number of teams registered so far, absent when `success` is false
    #[serde(default)]
    pub participant_count: u32,
}
