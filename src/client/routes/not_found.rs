use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx!(
        Title { "Page Not Found | Brainium" }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 py-24 text-center",
                h1 { class: "text-6xl font-bold text-blue-600", "404" }
                p { class: "text-xl", "Page not found" }
                p { class: "text-gray-500", "Nothing lives at {path}." }
                Link {
                    to: Route::Home {},
                    class: "rounded-lg bg-blue-600 px-6 py-3 font-semibold text-white hover:bg-blue-700",
                    "Back to Home"
                }
            }
        }
    )
}
