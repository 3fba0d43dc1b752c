use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Team size must be between {min} and {max} members, got {0}", min = crate::registration::form::MIN_TEAM_SIZE, max = crate::registration::form::MAX_TEAM_SIZE)]
    InvalidTeamSize(usize),
    #[error("No team member at position {index}, team has {len} members besides the leader")]
    MemberIndexOutOfRange { index: usize, len: usize },
}
