use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCalendar, FaLocationDot};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{
            backend_notice::raise_advisory, BackendNotice, EventDetailsModal, Page,
            RegistrationModal,
        },
        router::Route,
    },
    model::event::{EventInfo, FEATURED_EVENT, PAST_EVENTS, UPCOMING_EVENTS},
    registration::AdvisoryNotice,
};

#[component]
pub fn Events() -> Element {
    let notice = use_signal(AdvisoryNotice::new);
    let mut registering = use_signal(|| false);
    let mut details = use_signal(|| None::<usize>);

    let featured = &FEATURED_EVENT.info;

    rsx!(
        Title { "Events | Brainium" }
        Meta {
            name: "description",
            content: "Upcoming and past Brainium workshops, talks and hackathons."
        }
        BackendNotice { notice }
        Page {
            section { class: "max-w-6xl mx-auto px-4 py-12",
                h1 { class: "text-4xl font-bold text-center mb-10", "Events" }
                div { class: "grid overflow-hidden rounded-2xl bg-white shadow-lg md:grid-cols-2",
                    img { class: "h-full min-h-64 w-full object-cover", src: featured.image, alt: featured.title }
                    div { class: "flex flex-col gap-4 p-8",
                        span { class: "self-start rounded-full bg-purple-100 px-3 py-1 text-sm font-semibold text-purple-700",
                            "Featured Event"
                        }
                        h2 { class: "text-3xl font-bold", "{featured.title}" }
                        EventMeta { event: featured.clone() }
                        p { class: "text-gray-600", "{featured.description}" }
                        div { class: "mt-auto flex flex-wrap gap-3",
                            button {
                                class: "rounded-lg bg-blue-600 px-6 py-3 font-semibold text-white hover:bg-blue-700",
                                onclick: move |_| registering.set(true),
                                "Register Now"
                            }
                            Link {
                                to: Route::EventDetails {},
                                class: "rounded-lg border border-gray-300 px-6 py-3 font-semibold hover:bg-gray-50",
                                "View Details"
                            }
                        }
                    }
                }
            }
            section { class: "max-w-6xl mx-auto px-4 pb-12",
                h2 { class: "text-2xl font-bold mb-6", "Upcoming Events" }
                div { class: "grid gap-6 md:grid-cols-3",
                    for (index, event) in UPCOMING_EVENTS.iter().enumerate() {
                        div {
                            key: "{event.title}",
                            class: "flex flex-col overflow-hidden rounded-xl bg-white shadow-md",
                            img { class: "h-48 w-full object-cover", src: event.image, alt: event.title }
                            div { class: "flex flex-1 flex-col gap-3 p-6",
                                h3 { class: "text-xl font-semibold", "{event.title}" }
                                EventMeta { event: event.clone() }
                                p { class: "text-gray-600", "{event.description}" }
                                button {
                                    class: "mt-auto self-start font-semibold text-blue-600 hover:underline",
                                    onclick: move |_| details.set(Some(index)),
                                    "Learn More"
                                }
                            }
                        }
                    }
                }
            }
            section { class: "max-w-6xl mx-auto px-4 pb-16",
                h2 { class: "text-2xl font-bold mb-6", "Past Events" }
                div { class: "grid gap-6 md:grid-cols-3",
                    for event in PAST_EVENTS {
                        div {
                            key: "{event.title}",
                            class: "overflow-hidden rounded-xl bg-white opacity-90 shadow-md",
                            img { class: "h-40 w-full object-cover grayscale", src: event.image, alt: event.title }
                            div { class: "flex flex-col gap-2 p-6",
                                h3 { class: "text-lg font-semibold", "{event.title}" }
                                p { class: "text-sm text-gray-500", "{event.formatted_date()}" }
                                p { class: "text-gray-600", "{event.description}" }
                            }
                        }
                    }
                }
            }
        }
        if let Some(event) = details().and_then(|index| UPCOMING_EVENTS.get(index)) {
            EventDetailsModal {
                event: event.clone(),
                on_close: move |_| details.set(None),
            }
        }
        if registering() {
            RegistrationModal {
                event_title: featured.title.to_string(),
                on_stubbed: move |_| raise_advisory(notice),
                on_close: move |_| registering.set(false),
            }
        }
    )
}

#[component]
fn EventMeta(event: EventInfo) -> Element {
    rsx!(
        ul { class: "flex flex-col gap-1 text-sm text-gray-500",
            li { class: "flex items-center gap-2",
                Icon { width: 14, height: 14, icon: FaCalendar }
                "{event.formatted_date()}"
                if let Some(time) = event.time {
                    " · {time}"
                }
            }
            li { class: "flex items-center gap-2",
                Icon { width: 14, height: 14, icon: FaLocationDot }
                "{event.location}"
            }
        }
    )
}
