//! Team registration modal for the featured event.

use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleExclamation, FaXmark};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{
            member_fields::{MemberFields, MemberSlot},
            Confirmation,
        },
        util::ScriptBackend,
    },
    config::Config,
    error::SubmissionError,
    model::event::WEBMASTERS,
    registration::{
        form::{MAX_TEAM_SIZE, MIN_TEAM_SIZE},
        FieldKey, RegistrationBackend, RegistrationSession, SubmissionState,
    },
};

/// Registration form for `event_title`.
///
/// The form state is created when the modal mounts and discarded when it closes, so every
/// opening starts from an empty form.
///
/// # Arguments
/// - `event_title` - Event the team registers for
/// - `on_stubbed` - Called when a submission succeeded without an endpoint to send it to.
///   Owned by the hosting page so follow-up work outlives the modal
/// - `on_close` - Called when the user closes the modal
#[component]
pub fn RegistrationModal(
    event_title: String,
    on_stubbed: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let config = use_context::<Config>();
    let mut session = use_signal(|| RegistrationSession::new(event_title.clone()));

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        // Validation failures and double submits are reflected in the session state
        let Ok(payload) = session
            .write()
            .prepare_submission(Utc::now(), &mut rand::rng())
        else {
            return;
        };

        let backend = ScriptBackend::new(&config);
        spawn(async move {
            let result = backend.submit(&payload).await;

            let stubbed = reports_stub(session.write().finish_submission(&payload, result));

            // The hosting page raises the advisory in its own scope, the modal may close first
            if stubbed {
                on_stubbed.call(());
            }
        });
    };

    let state = session.read().state().clone();

    rsx!(
        div { class: "modal-backdrop flex items-center justify-center p-4",
            div { class: "relative w-full max-w-3xl max-h-[90vh] overflow-y-auto rounded-xl bg-white p-6 shadow-2xl",
                button {
                    class: "absolute top-4 right-4 text-gray-500 hover:text-gray-800",
                    aria_label: "Close",
                    onclick: move |_| on_close.call(()),
                    Icon { width: 20, height: 20, icon: FaXmark }
                }
                if let SubmissionState::Success(receipt) = &state {
                    Confirmation { confirmation: receipt.confirmation.clone(), on_close }
                } else {
                    h2 { class: "text-2xl font-bold mb-1", "Team Registration" }
                    p { class: "text-gray-600 mb-6", "{event_title}" }
                    if let SubmissionState::Error(error) = &state {
                        SubmissionErrorBanner { error: error.clone() }
                    }
                    RegistrationFormBody { session, onsubmit }
                }
            }
        }
    )
}

/// Whether a finished submission was only stubbed and the hosting page must be told.
fn reports_stub(state: &SubmissionState) -> bool {
    match state {
        SubmissionState::Success(receipt) => receipt.needs_advisory(),
        _ => false,
    }
}

#[component]
fn RegistrationFormBody(
    session: Signal<RegistrationSession>,
    onsubmit: EventHandler<FormEvent>,
) -> Element {
    let (team_name, team_name_error, team_size, member_count, submitting) = {
        let session = session.read();
        let form = session.form();
        (
            form.team_name().to_string(),
            form.error(FieldKey::TeamName).map(ToString::to_string),
            form.team_size(),
            form.members().len(),
            session.state().is_submitting(),
        )
    };

    let team_name_class = if team_name_error.is_some() {
        "rounded-md border border-red-500 px-3 py-2"
    } else {
        "rounded-md border border-gray-300 px-3 py-2"
    };

    rsx!(
        form {
            class: "flex flex-col gap-6",
            novalidate: true,
            onsubmit: move |evt| onsubmit.call(evt),
            div { class: "grid gap-4 md:grid-cols-2",
                div { class: "flex flex-col gap-1",
                    label { r#for: "teamName", class: "text-sm font-medium text-gray-700", "Team name" }
                    input {
                        id: "teamName",
                        class: team_name_class,
                        placeholder: "Team Alpha",
                        disabled: submitting,
                        value: "{team_name}",
                        oninput: move |evt: FormEvent| session.write().form_mut().set_team_name(&evt.value()),
                    }
                    if let Some(error) = team_name_error {
                        p { class: "text-sm text-red-600", "{error}" }
                    }
                }
                div { class: "flex flex-col gap-1",
                    label { r#for: "teamSize", class: "text-sm font-medium text-gray-700", "Team size" }
                    select {
                        id: "teamSize",
                        class: "rounded-md border border-gray-300 px-3 py-2",
                        disabled: submitting,
                        value: "{team_size}",
                        onchange: move |evt: FormEvent| change_team_size(session, &evt.value()),
                        for size in MIN_TEAM_SIZE..=MAX_TEAM_SIZE {
                            option {
                                value: "{size}",
                                selected: size == team_size,
                                "{size} members"
                            }
                        }
                    }
                }
            }
            MemberFields { session, slot: MemberSlot::Leader }
            for index in 0..member_count {
                MemberFields {
                    key: "{index}",
                    session,
                    slot: MemberSlot::Member(index),
                }
            }
            button {
                r#type: "submit",
                class: "rounded-lg bg-blue-600 px-6 py-3 font-semibold text-white hover:bg-blue-700 disabled:cursor-not-allowed disabled:opacity-60",
                disabled: submitting,
                if submitting { "Submitting..." } else { "Submit Registration" }
            }
        }
    )
}

fn change_team_size(mut session: Signal<RegistrationSession>, value: &str) {
    let Ok(size) = value.parse::<usize>() else {
        tracing::warn!("Ignoring non-numeric team size {:?}", value);
        return;
    };

    if let Err(e) = session.write().form_mut().set_team_size(size) {
        tracing::warn!("Ignoring team size change: {}", e);
    }
}

#[component]
fn SubmissionErrorBanner(error: SubmissionError) -> Element {
    let transport = matches!(error, SubmissionError::Transport(_));

    rsx!(
        div { class: "mb-6 flex gap-3 rounded-lg border border-red-200 bg-red-50 p-4",
            Icon {
                width: 20,
                height: 20,
                class: "text-red-600 mt-0.5",
                icon: FaCircleExclamation
            }
            div { class: "text-sm text-red-700",
                p { class: "font-semibold", "{error}" }
                if transport {
                    p { "If the problem persists, contact the webmasters:" }
                    ul { class: "mt-1",
                        for contact in WEBMASTERS {
                            li {
                                "{contact.name} - "
                                a { class: "underline", href: "mailto:{contact.email}", "{contact.email}" }
                            }
                        }
                    }
                }
            }
        }
    )
}
