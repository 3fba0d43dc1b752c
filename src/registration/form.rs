//! In-memory state of one registration form session.
//!
//! The form lives for as long as the registration modal is open. It holds the team name,
//! the leader and a list of non-leader members whose length always equals
//! `team_size - 1`, plus the inline validation error of every field that currently fails.

use std::{collections::BTreeMap, fmt};

use crate::{
    error::{FieldError, FormError},
    model::registration::{MemberDto, Semester},
    registration::validation::{self, FieldKind},
};

pub const MIN_TEAM_SIZE: usize = 2;
pub const MAX_TEAM_SIZE: usize = 4;

/// Inputs collected for every team member, leader included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MemberField {
    Name,
    Semester,
    InstitutionalId,
    Email,
    Phone,
}

impl MemberField {
    pub const ALL: [MemberField; 5] = [
        MemberField::Name,
        MemberField::Semester,
        MemberField::InstitutionalId,
        MemberField::Email,
        MemberField::Phone,
    ];

    pub fn kind(self) -> FieldKind {
        match self {
            MemberField::Name => FieldKind::Name,
            MemberField::Semester => FieldKind::Semester,
            MemberField::InstitutionalId => FieldKind::InstitutionalId,
            MemberField::Email => FieldKind::Email,
            MemberField::Phone => FieldKind::Phone,
        }
    }

    fn key_suffix(self) -> &'static str {
        match self {
            MemberField::Name => "Name",
            MemberField::Semester => "Semester",
            MemberField::InstitutionalId => "Usn",
            MemberField::Email => "Email",
            MemberField::Phone => "Phone",
        }
    }
}

/// Identifies one input of the form.
///
/// Displays as a stable key such as `teamName`, `leaderPhone` or `member0Email`, member
/// indices are zero based positions in the non-leader member list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKey {
    TeamName,
    Leader(MemberField),
    Member(usize, MemberField),
}

impl FieldKey {
    pub fn kind(self) -> FieldKind {
        match self {
            FieldKey::TeamName => FieldKind::TeamName,
            FieldKey::Leader(field) | FieldKey::Member(_, field) => field.kind(),
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKey::TeamName => write!(f, "teamName"),
            FieldKey::Leader(field) => write!(f, "leader{}", field.key_suffix()),
            FieldKey::Member(index, field) => write!(f, "member{}{}", index, field.key_suffix()),
        }
    }
}

/// Raw values of one member as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberForm {
    pub name: String,
    /// Value of the semester select, empty until a choice is made
    pub semester: String,
    pub institutional_id: String,
    pub email: String,
    pub phone: String,
}

impl MemberForm {
    pub fn value(&self, field: MemberField) -> &str {
        match field {
            MemberField::Name => &self.name,
            MemberField::Semester => &self.semester,
            MemberField::InstitutionalId => &self.institutional_id,
            MemberField::Email => &self.email,
            MemberField::Phone => &self.phone,
        }
    }

    fn slot(&mut self, field: MemberField) -> &mut String {
        match field {
            MemberField::Name => &mut self.name,
            MemberField::Semester => &mut self.semester,
            MemberField::InstitutionalId => &mut self.institutional_id,
            MemberField::Email => &mut self.email,
            MemberField::Phone => &mut self.phone,
        }
    }

    /// Converts the typed values into the wire representation.
    ///
    /// Returns `None` when the semester has not been chosen, callers run full-form
    /// validation first so this only happens for forms that were never validated.
    pub fn to_dto(&self) -> Option<MemberDto> {
        Some(MemberDto {
            name: self.name.trim().to_string(),
            semester: Semester::parse(&self.semester)?,
            institutional_id: self.institutional_id.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    team_name: String,
    leader: MemberForm,
    members: Vec<MemberForm>,
    errors: BTreeMap<FieldKey, FieldError>,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            team_name: String::new(),
            leader: MemberForm::default(),
            members: vec![MemberForm::default(); MIN_TEAM_SIZE - 1],
            errors: BTreeMap::new(),
        }
    }
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    /// Team size including the leader.
    pub fn team_size(&self) -> usize {
        self.members.len() + 1
    }

    pub fn leader(&self) -> &MemberForm {
        &self.leader
    }

    pub fn members(&self) -> &[MemberForm] {
        &self.members
    }

    /// Inline errors of fields that failed their last validation.
    pub fn errors(&self) -> &BTreeMap<FieldKey, FieldError> {
        &self.errors
    }

    pub fn error(&self, key: FieldKey) -> Option<&FieldError> {
        self.errors.get(&key)
    }

    /// Current value of a field, `None` for a member index past the end of the team.
    pub fn value(&self, key: FieldKey) -> Option<&str> {
        match key {
            FieldKey::TeamName => Some(&self.team_name),
            FieldKey::Leader(field) => Some(self.leader.value(field)),
            FieldKey::Member(index, field) => self.members.get(index).map(|m| m.value(field)),
        }
    }

    /// Resizes the member list to `size - 1` entries.
    ///
    /// Existing members keep their values by position, surplus trailing members are dropped
    /// together with their inline errors and new positions start out empty.
    ///
    /// # Returns
    /// - `Ok(())` - Team resized
    /// - `Err(FormError::InvalidTeamSize)` - `size` is outside 2..=4, form unchanged
    pub fn set_team_size(&mut self, size: usize) -> Result<(), FormError> {
        if !(MIN_TEAM_SIZE..=MAX_TEAM_SIZE).contains(&size) {
            return Err(FormError::InvalidTeamSize(size));
        }

        let member_count = size - 1;
        self.members.resize_with(member_count, MemberForm::default);
        self.errors
            .retain(|key, _| !matches!(key, FieldKey::Member(index, _) if *index >= member_count));

        Ok(())
    }

    pub fn set_team_name(&mut self, value: &str) {
        self.team_name = value.to_string();
        self.revalidate(FieldKey::TeamName);
    }

    pub fn set_leader_field(&mut self, field: MemberField, value: &str) {
        *self.leader.slot(field) = normalize(field, value);
        self.revalidate(FieldKey::Leader(field));
    }

    /// Updates a field of the non-leader member at `index`.
    ///
    /// # Returns
    /// - `Ok(())` - Value stored, inline error updated
    /// - `Err(FormError::MemberIndexOutOfRange)` - No member at `index`
    pub fn set_member_field(
        &mut self,
        index: usize,
        field: MemberField,
        value: &str,
    ) -> Result<(), FormError> {
        let len = self.members.len();
        let member = self
            .members
            .get_mut(index)
            .ok_or(FormError::MemberIndexOutOfRange { index, len })?;

        *member.slot(field) = normalize(field, value);
        self.revalidate(FieldKey::Member(index, field));

        Ok(())
    }

    /// Runs every field validator and returns only the failing fields.
    pub fn validate_all(&self) -> BTreeMap<FieldKey, FieldError> {
        self.keys()
            .filter_map(|key| {
                let value = self.value(key)?;
                validation::validate(key.kind(), value)
                    .err()
                    .map(|err| (key, err))
            })
            .collect()
    }

    /// Replaces the inline errors, used after a full-form validation pass.
    pub fn set_errors(&mut self, errors: BTreeMap<FieldKey, FieldError>) {
        self.errors = errors;
    }

    /// Every field key of the form in display order.
    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        let leader = MemberField::ALL.into_iter().map(FieldKey::Leader);
        let members = (0..self.members.len()).flat_map(|index| {
            MemberField::ALL
                .into_iter()
                .map(move |field| FieldKey::Member(index, field))
        });

        std::iter::once(FieldKey::TeamName)
            .chain(leader)
            .chain(members)
    }

    fn revalidate(&mut self, key: FieldKey) {
        let result = self
            .value(key)
            .map(|value| validation::validate(key.kind(), value));

        match result {
            Some(Err(err)) => {
                self.errors.insert(key, err);
            }
            _ => {
                self.errors.remove(&key);
            }
        }
    }
}

fn normalize(field: MemberField, value: &str) -> String {
    match field {
        MemberField::InstitutionalId => validation::normalize_institutional_id(value),
        MemberField::Phone => validation::normalize_phone(value),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_member(form: &mut RegistrationForm, index: usize, name: &str) {
        form.set_member_field(index, MemberField::Name, name).unwrap();
        form.set_member_field(index, MemberField::Semester, "3")
            .unwrap();
        form.set_member_field(index, MemberField::InstitutionalId, "1td22cs010")
            .unwrap();
        form.set_member_field(index, MemberField::Email, "member@x.com")
            .unwrap();
        form.set_member_field(index, MemberField::Phone, "8123456789")
            .unwrap();
    }

    #[test]
    fn test_new_form_has_one_member() {
        let form = RegistrationForm::new();
        assert_eq!(form.team_size(), 2);
        assert_eq!(form.members().len(), 1);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_shrinking_team_keeps_leading_members() {
        let mut form = RegistrationForm::new();
        form.set_team_size(3).unwrap();
        fill_member(&mut form, 0, "Alice Doe");
        fill_member(&mut form, 1, "Bob Roe");

        form.set_team_size(2).unwrap();

        assert_eq!(form.members().len(), 1);
        assert_eq!(form.members()[0].name, "Alice Doe");
        assert_eq!(form.members()[0].institutional_id, "1TD22CS010");
    }

    #[test]
    fn test_growing_team_adds_empty_member_instead_of_restoring() {
        let mut form = RegistrationForm::new();
        form.set_team_size(3).unwrap();
        fill_member(&mut form, 0, "Alice Doe");
        fill_member(&mut form, 1, "Bob Roe");

        form.set_team_size(2).unwrap();
        form.set_team_size(3).unwrap();

        assert_eq!(form.members().len(), 2);
        assert_eq!(form.members()[0].name, "Alice Doe");
        assert_eq!(form.members()[1], MemberForm::default());
    }

    #[test]
    fn test_invalid_team_size_leaves_form_unchanged() {
        let mut form = RegistrationForm::new();
        form.set_team_size(3).unwrap();

        assert_eq!(form.set_team_size(1), Err(FormError::InvalidTeamSize(1)));
        assert_eq!(form.set_team_size(5), Err(FormError::InvalidTeamSize(5)));
        assert_eq!(form.team_size(), 3);
    }

    #[test]
    fn test_shrinking_team_drops_errors_of_removed_members() {
        let mut form = RegistrationForm::new();
        form.set_team_size(4).unwrap();
        form.set_member_field(2, MemberField::Phone, "12").unwrap();
        assert!(form.error(FieldKey::Member(2, MemberField::Phone)).is_some());

        form.set_team_size(2).unwrap();

        assert!(form.error(FieldKey::Member(2, MemberField::Phone)).is_none());
    }

    #[test]
    fn test_institutional_id_is_uppercased_on_write() {
        let mut form = RegistrationForm::new();
        form.set_leader_field(MemberField::InstitutionalId, "1by23ai045");
        assert_eq!(form.leader().institutional_id, "1BY23AI045");
        assert!(form
            .error(FieldKey::Leader(MemberField::InstitutionalId))
            .is_none());
    }

    #[test]
    fn test_phone_keeps_first_ten_digits_only() {
        let mut form = RegistrationForm::new();
        form.set_leader_field(MemberField::Phone, "98-765 4321099");
        assert_eq!(form.leader().phone, "9876543210");
    }

    #[test]
    fn test_inline_validation_sets_and_clears_error() {
        let mut form = RegistrationForm::new();
        form.set_leader_field(MemberField::Email, "john@");
        assert!(matches!(
            form.error(FieldKey::Leader(MemberField::Email)),
            Some(FieldError::InvalidFormat { .. })
        ));

        form.set_leader_field(MemberField::Email, "john@x.com");
        assert!(form.error(FieldKey::Leader(MemberField::Email)).is_none());
    }

    #[test]
    fn test_set_member_field_out_of_range() {
        let mut form = RegistrationForm::new();
        assert_eq!(
            form.set_member_field(1, MemberField::Name, "Bob"),
            Err(FormError::MemberIndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_validate_all_reports_every_empty_field() {
        let mut form = RegistrationForm::new();
        form.set_team_size(3).unwrap();

        let errors = form.validate_all();

        // team name + 5 leader fields + 2 members * 5 fields
        assert_eq!(errors.len(), 1 + 5 + 10);
        assert_eq!(
            errors.get(&FieldKey::Member(1, MemberField::Semester)),
            Some(&FieldError::Required("Semester"))
        );
    }

    #[test]
    fn test_field_key_display() {
        assert_eq!(FieldKey::TeamName.to_string(), "teamName");
        assert_eq!(
            FieldKey::Leader(MemberField::Phone).to_string(),
            "leaderPhone"
        );
        assert_eq!(
            FieldKey::Member(0, MemberField::InstitutionalId).to_string(),
            "member0Usn"
        );
    }
}
