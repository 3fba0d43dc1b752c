//! Declarative setup of registration sessions.

use brainium::registration::{FieldKey, MemberField, RegistrationSession};

use crate::{error::TestError, fixtures::registration as factory};

/// Builder for a [`RegistrationSession`] pre-filled with valid factory values.
///
/// Overrides are applied after the factory values through the same setters the UI uses, so
/// normalization and inline validation behave exactly as for typed input.
pub struct RegistrationBuilder {
    event_title: String,
    team_name: String,
    team_size: usize,
    overrides: Vec<(FieldKey, String)>,
}

impl Default for RegistrationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationBuilder {
    /// Create a builder for a valid team of two registering for the featured event.
    pub fn new() -> Self {
        Self {
            event_title: factory::EVENT_TITLE.to_string(),
            team_name: factory::TEAM_NAME.to_string(),
            team_size: 2,
            overrides: Vec::new(),
        }
    }

    pub fn with_event_title(mut self, title: &str) -> Self {
        self.event_title = title.to_string();
        self
    }

    pub fn with_team_name(mut self, name: &str) -> Self {
        self.team_name = name.to_string();
        self
    }

    /// Team size including the leader, every added member is filled with factory values.
    pub fn with_team_size(mut self, size: usize) -> Self {
        self.team_size = size;
        self
    }

    /// Replace the value of one field after the factory values are applied.
    ///
    /// # Arguments
    /// - `key` - Field to overwrite, `FieldKey::TeamName` replaces the team name
    /// - `value` - Raw value as if typed into the input
    pub fn with_field(mut self, key: FieldKey, value: &str) -> Self {
        self.overrides.push((key, value.to_string()));
        self
    }

    /// Build the session.
    ///
    /// # Returns
    /// - `Ok(RegistrationSession)` - Session in the `Idle` state
    /// - `Err(TestError::FormError)` - Team size or an override's member index is invalid
    pub fn build(self) -> Result<RegistrationSession, TestError> {
        let mut session = RegistrationSession::new(self.event_title);
        let form = session.form_mut();

        form.set_team_size(self.team_size)?;
        form.set_team_name(&self.team_name);

        for (field, value) in factory::leader_values() {
            form.set_leader_field(field, &value);
        }
        for index in 0..self.team_size - 1 {
            for (field, value) in factory::member_values(index) {
                form.set_member_field(index, field, &value)?;
            }
        }

        for (key, value) in self.overrides {
            match key {
                FieldKey::TeamName => form.set_team_name(&value),
                FieldKey::Leader(field) => form.set_leader_field(field, &value),
                FieldKey::Member(index, field) => form.set_member_field(index, field, &value)?,
            }
        }

        Ok(session)
    }
}

/// Key of the leader's `field`, shorthand for overrides.
pub fn leader(field: MemberField) -> FieldKey {
    FieldKey::Leader(field)
}
