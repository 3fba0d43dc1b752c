use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronLeft, FaChevronRight};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::Page,
        util::carousel::{next_start, prev_start, window, MEMBERS_PER_VIEW},
    },
    model::team::TEAMS,
};

#[component]
pub fn About() -> Element {
    rsx!(
        Title { "About | Brainium" }
        Meta {
            name: "description",
            content: "Meet the teams behind Brainium, the student AI club."
        }
        Page {
            section { class: "max-w-4xl mx-auto px-4 py-16 text-center",
                h1 { class: "text-4xl font-bold mb-4", "About Brainium" }
                p { class: "text-lg text-gray-600",
                    "Brainium is a student-run club dedicated to making artificial intelligence approachable. We host workshops, talks and hackathons so that anyone, whatever their background, can learn by building."
                }
            }
            TeamShowcase {}
        }
    )
}

#[component]
fn TeamShowcase() -> Element {
    let mut selected = use_signal(|| 0usize);
    let mut start = use_signal(|| 0usize);

    let Some(team) = TEAMS.get(selected()) else {
        return rsx!();
    };
    let len = team.members.len();

    rsx!(
        section { class: "max-w-6xl mx-auto px-4 pb-16",
            h2 { class: "text-3xl font-bold text-center mb-8", "Our Teams" }
            div { class: "flex flex-wrap justify-center gap-2 mb-8",
                for (index, tab) in TEAMS.iter().enumerate() {
                    button {
                        key: "{tab.name}",
                        class: if index == selected() { "rounded-full bg-blue-600 px-4 py-2 text-white" } else { "rounded-full bg-gray-200 px-4 py-2 hover:bg-gray-300" },
                        onclick: move |_| {
                            selected.set(index);
                            start.set(0);
                        },
                        "{tab.name}"
                    }
                }
            }
            div { class: "flex items-center gap-4",
                button {
                    class: "rounded-full bg-white p-3 shadow hover:bg-gray-50",
                    aria_label: "Previous members",
                    onclick: move |_| start.set(prev_start(start(), len, MEMBERS_PER_VIEW)),
                    Icon { width: 16, height: 16, icon: FaChevronLeft }
                }
                div { class: "grid flex-1 gap-6 md:grid-cols-3",
                    for member in window(team.members, start(), MEMBERS_PER_VIEW) {
                        div {
                            key: "{member.name}",
                            class: "flex flex-col items-center gap-2 rounded-xl bg-white p-6 shadow-md",
                            img {
                                class: "h-32 w-32 rounded-full object-cover",
                                src: member.photo,
                                alt: member.name,
                            }
                            p { class: "text-lg font-semibold", "{member.name}" }
                            p { class: "text-gray-500", "{member.role}" }
                        }
                    }
                }
                button {
                    class: "rounded-full bg-white p-3 shadow hover:bg-gray-50",
                    aria_label: "Next members",
                    onclick: move |_| start.set(next_start(start(), len, MEMBERS_PER_VIEW)),
                    Icon { width: 16, height: 16, icon: FaChevronRight }
                }
            }
        }
    )
}
