use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBars, FaBrain, FaXmark};
use dioxus_free_icons::Icon;

pub use crate::client::router::Route;

const NAV_LINKS: [(&str, Route); 4] = [
    ("Home", Route::Home {}),
    ("About", Route::About {}),
    ("Events", Route::Events {}),
    ("Gallery", Route::Gallery {}),
];

/// Whether the navbar entry for `link` is highlighted while `current` is displayed.
pub fn is_active(current: &Route, link: &Route) -> bool {
    match (current, link) {
        (Route::EventDetails {}, Route::Events {}) => true,
        _ => std::mem::discriminant(current) == std::mem::discriminant(link),
    }
}

#[component]
pub fn Navbar() -> Element {
    let current = use_route::<Route>();
    let mut menu_open = use_signal(|| false);

    let link_class = |link: &Route| {
        if is_active(&current, link) {
            "text-blue-600 font-semibold"
        } else {
            "text-gray-700 hover:text-blue-600"
        }
    };

    rsx! {
        nav {
            class: "fixed top-0 inset-x-0 z-40 bg-white/90 backdrop-blur shadow-sm",
            div {
                class: "max-w-7xl mx-auto px-4 h-16 flex items-center justify-between",
                Link {
                    to: Route::Home {},
                    class: "flex items-center gap-2",
                    Icon {
                        width: 28,
                        height: 28,
                        class: "text-blue-600",
                        icon: FaBrain
                    }
                    span { class: "text-xl font-bold", "Brainium" }
                }
                ul { class: "hidden md:flex gap-8",
                    for (label, route) in NAV_LINKS {
                        li {
                            Link {
                                to: route.clone(),
                                class: link_class(&route),
                                "{label}"
                            }
                        }
                    }
                }
                button {
                    class: "md:hidden p-2",
                    aria_label: "Toggle menu",
                    onclick: move |_| menu_open.toggle(),
                    if menu_open() {
                        Icon { width: 24, height: 24, icon: FaXmark }
                    } else {
                        Icon { width: 24, height: 24, icon: FaBars }
                    }
                }
            }
            if menu_open() {
                ul { class: "md:hidden flex flex-col gap-2 px-4 pb-4 bg-white",
                    for (label, route) in NAV_LINKS {
                        li {
                            onclick: move |_| menu_open.set(false),
                            Link {
                                to: route.clone(),
                                class: link_class(&route),
                                "{label}"
                            }
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
