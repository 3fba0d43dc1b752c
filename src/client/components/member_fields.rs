use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    model::registration::Semester,
    registration::{FieldKey, MemberField, RegistrationSession},
};

/// Whose inputs a [`MemberFields`] group edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberSlot {
    Leader,
    /// Zero based position among the non-leader members
    Member(usize),
}

impl MemberSlot {
    pub fn key(self, field: MemberField) -> FieldKey {
        match self {
            MemberSlot::Leader => FieldKey::Leader(field),
            MemberSlot::Member(index) => FieldKey::Member(index, field),
        }
    }

    pub fn title(self) -> String {
        match self {
            MemberSlot::Leader => "Team Leader".to_string(),
            MemberSlot::Member(index) => format!("Member {}", index + 2),
        }
    }
}

fn input_type(field: MemberField) -> &'static str {
    match field {
        MemberField::Email => "email",
        MemberField::Phone => "tel",
        _ => "text",
    }
}

fn placeholder(field: MemberField) -> &'static str {
    match field {
        MemberField::Name => "Full name",
        MemberField::Semester => "",
        MemberField::InstitutionalId => "1BY23AI045",
        MemberField::Email => "name@example.com",
        MemberField::Phone => "9876543210",
    }
}

fn write_field(
    mut session: Signal<RegistrationSession>,
    slot: MemberSlot,
    field: MemberField,
    value: &str,
) {
    let mut session = session.write();
    let form = session.form_mut();

    match slot {
        MemberSlot::Leader => form.set_leader_field(field, value),
        MemberSlot::Member(index) => {
            if let Err(e) = form.set_member_field(index, field, value) {
                tracing::warn!("Ignoring input for {}: {}", slot.key(field), e);
            }
        }
    }
}

/// Inputs for one team member with their inline validation errors.
#[component]
pub fn MemberFields(session: Signal<RegistrationSession>, slot: MemberSlot) -> Element {
    let disabled = session.read().state().is_submitting();

    rsx!(
        fieldset { class: "rounded-lg border border-gray-200 p-4",
            legend { class: "px-2 font-semibold text-gray-800", "{slot.title()}" }
            div { class: "grid gap-4 md:grid-cols-2",
                for field in MemberField::ALL {
                    FieldInput {
                        key: "{slot.key(field)}",
                        session,
                        slot,
                        field,
                        disabled: disabled,
                    }
                }
            }
        }
    )
}

#[component]
fn FieldInput(
    session: Signal<RegistrationSession>,
    slot: MemberSlot,
    field: MemberField,
    disabled: bool,
) -> Element {
    let key = slot.key(field);
    let label = field.kind().label();
    let id = key.to_string();

    let (value, error) = {
        let session = session.read();
        let form = session.form();
        (
            form.value(key).unwrap_or_default().to_string(),
            form.error(key).map(ToString::to_string),
        )
    };

    let border = if error.is_some() {
        "border-red-500"
    } else {
        "border-gray-300"
    };

    rsx!(
        div { class: "flex flex-col gap-1",
            label { r#for: "{id}", class: "text-sm font-medium text-gray-700", "{label}" }
            if field == MemberField::Semester {
                select {
                    id: "{id}",
                    class: "rounded-md border {border} px-3 py-2",
                    disabled: disabled,
                    value: "{value}",
                    onchange: move |evt: FormEvent| write_field(session, slot, field, &evt.value()),
                    option { value: "", disabled: true, selected: value.is_empty(), "Select semester" }
                    for semester in Semester::ALL {
                        option {
                            value: "{semester.number()}",
                            selected: value == semester.number().to_string(),
                            "{semester.label()}"
                        }
                    }
                }
            } else {
                input {
                    id: "{id}",
                    r#type: input_type(field),
                    class: "rounded-md border {border} px-3 py-2",
                    placeholder: placeholder(field),
                    disabled: disabled,
                    value: "{value}",
                    oninput: move |evt: FormEvent| write_field(session, slot, field, &evt.value()),
                }
            }
            if let Some(error) = error {
                p { class: "text-sm text-red-600", "{error}" }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_keys_match_form_keys() {
        assert_eq!(
            MemberSlot::Leader.key(MemberField::Phone).to_string(),
            "leaderPhone"
        );
        assert_eq!(
            MemberSlot::Member(0).key(MemberField::Email).to_string(),
            "member0Email"
        );
    }

    #[test]
    fn test_member_titles_count_the_leader() {
        assert_eq!(MemberSlot::Leader.title(), "Team Leader");
        assert_eq!(MemberSlot::Member(0).title(), "Member 2");
    }
}
