//! Featured event page with live capacity and team registration.

use chrono::Utc;
use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCalendar, FaCircleCheck, FaClock, FaEnvelope, FaLocationDot, FaPhone, FaUsers,
};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{backend_notice::raise_advisory, BackendNotice, Page, RegistrationModal},
        util::{sleep_ms, ScriptBackend},
    },
    config::Config,
    model::event::{format_event_date, FEATURED_EVENT, WEBMASTERS},
    registration::{
        backend::refresh_participant_count,
        status::{fill_percent, registration_status, spots_remaining},
        AdvisoryNotice, RegistrationStatus,
    },
};

/// Interval between participant count refreshes.
pub const COUNT_POLL_INTERVAL_MS: u32 = 30_000;

/// Delay before refreshing the count after the registration modal closes.
pub const COUNT_REFRESH_AFTER_CLOSE_MS: u32 = 1_000;

/// Fetches the participant count once and applies it to `count`.
///
/// `count` is `None` until the first refresh completes. Fallback counts raise the advisory.
async fn refresh_count(
    backend: &ScriptBackend,
    mut count: Signal<Option<u32>>,
    notice: Signal<AdvisoryNotice>,
) {
    let update = refresh_participant_count(backend).await;

    let current = (*count.peek()).unwrap_or_default();
    count.set(Some(update.apply(current)));

    if update.raises_advisory() {
        raise_advisory(notice);
    }
}

#[component]
pub fn EventDetails() -> Element {
    let config = use_context::<Config>();
    let notice = use_signal(AdvisoryNotice::new);
    let count = use_signal(|| None::<u32>);
    let mut registering = use_signal(|| false);

    // Poll for the lifetime of the page, the task is dropped on unmount
    let backend = ScriptBackend::new(&config);
    let poll_backend = backend.clone();
    use_future(move || {
        let backend = poll_backend.clone();
        async move {
            loop {
                refresh_count(&backend, count, notice).await;
                sleep_ms(COUNT_POLL_INTERVAL_MS).await;
            }
        }
    });

    let on_close = move |_: ()| {
        registering.set(false);

        let backend = backend.clone();
        spawn(async move {
            sleep_ms(COUNT_REFRESH_AFTER_CLOSE_MS).await;
            refresh_count(&backend, count, notice).await;
        });
    };

    let event = &FEATURED_EVENT.info;
    let max = FEATURED_EVENT.max_participants;

    rsx!(
        Title { "{event.title} | Brainium" }
        Meta {
            name: "description",
            content: event.description
        }
        BackendNotice { notice }
        Page {
            div { class: "relative h-80",
                img { class: "h-full w-full object-cover", src: event.image, alt: event.title }
                div { class: "absolute inset-0 flex items-end bg-gradient-to-t from-black/70 to-transparent",
                    h1 { class: "max-w-6xl mx-auto w-full px-4 pb-8 text-4xl font-bold text-white", "{event.title}" }
                }
            }
            div { class: "max-w-6xl mx-auto grid gap-8 px-4 py-12 lg:grid-cols-3",
                div { class: "flex flex-col gap-6 lg:col-span-2",
                    ul { class: "grid gap-3 rounded-xl bg-white p-6 shadow-md md:grid-cols-3",
                        li { class: "flex items-center gap-2",
                            Icon { width: 16, height: 16, class: "text-blue-600", icon: FaCalendar }
                            "{event.formatted_date()}"
                        }
                        if let Some(time) = event.time {
                            li { class: "flex items-center gap-2",
                                Icon { width: 16, height: 16, class: "text-blue-600", icon: FaClock }
                                "{time}"
                            }
                        }
                        li { class: "flex items-center gap-2",
                            Icon { width: 16, height: 16, class: "text-blue-600", icon: FaLocationDot }
                            "{event.location}"
                        }
                    }
                    div { class: "rounded-xl bg-white p-6 shadow-md",
                        h2 { class: "text-2xl font-bold mb-4", "About This Event" }
                        p { class: "text-gray-700 mb-4", "{event.description}" }
                        h3 { class: "text-lg font-semibold mb-2", "Event Highlights" }
                        ul { class: "flex flex-col gap-2 mb-4",
                            for highlight in FEATURED_EVENT.highlights {
                                li { class: "flex items-start gap-2",
                                    Icon { width: 16, height: 16, class: "text-green-500 mt-1", icon: FaCircleCheck }
                                    "{highlight}"
                                }
                            }
                        }
                        p { class: "text-gray-700", "{FEATURED_EVENT.closing_note}" }
                    }
                }
                div { class: "flex flex-col gap-6",
                    RegistrationCard { count, max, on_register: move |_| registering.set(true) }
                    div { class: "rounded-xl bg-white p-6 shadow-md",
                        h3 { class: "text-lg font-semibold mb-4", "Need Help?" }
                        p { class: "text-sm text-gray-600 mb-4", "Contact our webmasters for registration support." }
                        ul { class: "flex flex-col gap-4",
                            for contact in WEBMASTERS {
                                li { key: "{contact.email}", class: "flex flex-col gap-1 text-sm",
                                    p { class: "font-semibold", "{contact.name}" }
                                    a { class: "flex items-center gap-2 text-blue-600 hover:underline", href: "mailto:{contact.email}",
                                        Icon { width: 14, height: 14, icon: FaEnvelope }
                                        "{contact.email}"
                                    }
                                    a { class: "flex items-center gap-2 text-blue-600 hover:underline", href: contact.phone_href(),
                                        Icon { width: 14, height: 14, icon: FaPhone }
                                        "{contact.phone}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        if registering() {
            RegistrationModal {
                event_title: event.title.to_string(),
                on_stubbed: move |_| raise_advisory(notice),
                on_close,
            }
        }
    )
}

/// Capacity and registration call to action of the featured event.
#[component]
fn RegistrationCard(count: Signal<Option<u32>>, max: u32, on_register: EventHandler<()>) -> Element {
    let Some(registered) = count() else {
        return rsx!(
            div { class: "flex flex-col items-center gap-3 rounded-xl bg-white p-6 shadow-md",
                div { class: "h-8 w-8 animate-spin rounded-full border-4 border-blue-600 border-t-transparent" }
                p { class: "text-gray-500", "Loading registration status..." }
            }
        );
    };

    let status = match FEATURED_EVENT.deadline() {
        Some(deadline) => registration_status(Utc::now(), deadline, registered, max),
        // An unreadable deadline never leaves registration open
        None => RegistrationStatus::Closed,
    };
    let remaining = spots_remaining(registered, max);
    let percent = fill_percent(registered, max);
    let deadline = format_event_date(FEATURED_EVENT.registration_deadline);

    rsx!(
        div { class: "flex flex-col gap-4 rounded-xl bg-white p-6 shadow-md",
            h3 { class: "text-lg font-semibold", "Registration" }
            div { class: "flex items-center justify-between text-sm",
                span { class: "flex items-center gap-2",
                    Icon { width: 14, height: 14, icon: FaUsers }
                    "{registered} / {max} teams"
                }
                span { class: "text-gray-500", "{remaining} spots left" }
            }
            div { class: "h-3 w-full overflow-hidden rounded-full bg-gray-200",
                div {
                    class: "capacity-bar h-full rounded-full bg-blue-600",
                    style: "width: {percent:.0}%",
                }
            }
            {match status {
                RegistrationStatus::Open => rsx!(
                    p { class: "text-sm text-gray-500", "Registration closes on {deadline}." }
                    button {
                        class: "rounded-lg bg-blue-600 px-6 py-3 font-semibold text-white hover:bg-blue-700",
                        onclick: move |_| on_register.call(()),
                        "Register Your Team"
                    }
                ),
                RegistrationStatus::Full => rsx!(
                    p { class: "rounded-lg bg-yellow-50 p-3 text-center font-semibold text-yellow-800",
                        "Registration Full"
                    }
                ),
                RegistrationStatus::Closed => rsx!(
                    p { class: "rounded-lg bg-gray-100 p-3 text-center font-semibold text-gray-600",
                        "Registration Closed"
                    }
                ),
            }}
        }
    )
}
