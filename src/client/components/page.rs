use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-16 {class}",
            {children}
        }
        Footer {}
    )
}

#[component]
fn Footer() -> Element {
    rsx!(
        footer { class: "bg-gray-900 text-gray-400 py-8 text-center text-sm",
            p { "© 2026 Brainium AI Club. All rights reserved." }
        }
    )
}
