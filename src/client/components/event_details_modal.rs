use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCalendar, FaClock, FaLocationDot, FaXmark};
use dioxus_free_icons::Icon;

use crate::model::event::EventInfo;

/// Details of an upcoming event opened from its "Learn More" button.
#[component]
pub fn EventDetailsModal(event: EventInfo, on_close: EventHandler<()>) -> Element {
    rsx!(
        div {
            class: "modal-backdrop flex items-center justify-center p-4",
            onclick: move |_| on_close.call(()),
            div {
                class: "relative w-full max-w-2xl overflow-hidden rounded-xl bg-white shadow-2xl",
                onclick: move |evt| evt.stop_propagation(),
                img { class: "h-64 w-full object-cover", src: event.image, alt: event.title }
                button {
                    class: "absolute top-4 right-4 rounded-full bg-white/80 p-2 text-gray-700 hover:bg-white",
                    aria_label: "Close",
                    onclick: move |_| on_close.call(()),
                    Icon { width: 18, height: 18, icon: FaXmark }
                }
                div { class: "flex flex-col gap-4 p-6",
                    h2 { class: "text-2xl font-bold", "{event.title}" }
                    ul { class: "flex flex-col gap-2 text-gray-600",
                        li { class: "flex items-center gap-2",
                            Icon { width: 16, height: 16, icon: FaCalendar }
                            "{event.formatted_date()}"
                        }
                        if let Some(time) = event.time {
                            li { class: "flex items-center gap-2",
                                Icon { width: 16, height: 16, icon: FaClock }
                                "{time}"
                            }
                        }
                        li { class: "flex items-center gap-2",
                            Icon { width: 16, height: 16, icon: FaLocationDot }
                            "{event.location}"
                        }
                    }
                    p { class: "text-gray-700", "{event.description}" }
                    button {
                        class: "self-end rounded-lg border border-gray-300 px-4 py-2 hover:bg-gray-50",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    )
}
