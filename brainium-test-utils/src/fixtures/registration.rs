//! Factory functions for registration test data.
//!
//! Every value produced here passes validation, tests break a single field on top of them
//! to exercise one failure at a time.

use brainium::{
    model::registration::{ConfirmationDto, MemberDto, RegistrationDto, Semester},
    registration::MemberField,
};
use chrono::{DateTime, TimeZone, Utc};

pub const EVENT_TITLE: &str = "AI Innovation Summit 2026";
pub const TEAM_NAME: &str = "Team Alpha";

const MEMBER_NAMES: [&str; 3] = ["Jane Doe", "Ravi Kumar", "Meera Nair"];

/// Fixed submission time used by fixtures, 2026-10-19 12:00:00 UTC.
pub fn submitted_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Form values of the team leader "John Smith".
pub fn leader_values() -> Vec<(MemberField, String)> {
    vec![
        (MemberField::Name, "John Smith".to_string()),
        (MemberField::Semester, "1".to_string()),
        (MemberField::InstitutionalId, "1BY23AI045".to_string()),
        (MemberField::Email, "john@x.com".to_string()),
        (MemberField::Phone, "9876543210".to_string()),
    ]
}

/// Form values of the non-leader member at `index`, distinct per index.
///
/// # Arguments
/// - `index` - Zero based member position, at most 2
pub fn member_values(index: usize) -> Vec<(MemberField, String)> {
    let name = MEMBER_NAMES[index % MEMBER_NAMES.len()];

    vec![
        (MemberField::Name, name.to_string()),
        (MemberField::Semester, "3".to_string()),
        (MemberField::InstitutionalId, format!("1TD23AI04{}", 6 + index)),
        (MemberField::Email, format!("member{}@x.com", index)),
        (MemberField::Phone, format!("876543210{}", index)),
    ]
}

pub fn leader_dto() -> MemberDto {
    MemberDto {
        name: "John Smith".to_string(),
        semester: Semester::First,
        institutional_id: "1BY23AI045".to_string(),
        email: "john@x.com".to_string(),
        phone: "9876543210".to_string(),
    }
}

pub fn member_dto(index: usize) -> MemberDto {
    MemberDto {
        name: MEMBER_NAMES[index % MEMBER_NAMES.len()].to_string(),
        semester: Semester::Third,
        institutional_id: format!("1TD23AI04{}", 6 + index),
        email: format!("member{}@x.com", index),
        phone: format!("876543210{}", index),
    }
}

/// Registration payload of a team of `team_size` built from the factory members.
pub fn registration_dto(registration_id: &str, team_size: usize) -> RegistrationDto {
    RegistrationDto {
        registration_id: registration_id.to_string(),
        submitted_at: submitted_at(),
        event_title: EVENT_TITLE.to_string(),
        team_name: TEAM_NAME.to_string(),
        team_size,
        leader: leader_dto(),
        members: (0..team_size.saturating_sub(1)).map(member_dto).collect(),
    }
}

pub fn confirmation_dto(registration_id: &str) -> ConfirmationDto {
    ConfirmationDto::from(&registration_dto(registration_id, 2))
}
