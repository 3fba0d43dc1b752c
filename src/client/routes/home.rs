use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCode, FaLightbulb, FaUsers};
use dioxus_free_icons::Icon;

use crate::client::components::Page;
use crate::client::router::Route;

#[component]
fn FeatureCard(title: &'static str, description: &'static str, children: Element) -> Element {
    rsx!(
        div { class: "flex flex-col items-center gap-3 rounded-xl bg-white p-8 text-center shadow-md",
            div { class: "rounded-full bg-blue-100 p-4 text-blue-600",
                {children}
            }
            h3 { class: "text-xl font-semibold", "{title}" }
            p { class: "text-gray-600", "{description}" }
        }
    )
}

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Brainium | AI Club" }
        Meta {
            name: "description",
            content: "Brainium is a student club exploring artificial intelligence through workshops, hackathons and talks."
        }
        Page {
            section { class: "hero-gradient text-white",
                div { class: "max-w-5xl mx-auto px-4 py-24 flex flex-col items-center gap-6 text-center",
                    h1 { class: "text-5xl font-bold", "Welcome to Brainium" }
                    p { class: "text-xl max-w-2xl opacity-90",
                        "Where curious minds explore the future of Artificial Intelligence together."
                    }
                    div { class: "flex flex-wrap justify-center gap-4",
                        Link {
                            to: Route::About {},
                            class: "rounded-lg bg-white px-6 py-3 font-semibold text-blue-600 hover:bg-gray-100",
                            "Learn More"
                        }
                        Link {
                            to: Route::Events {},
                            class: "rounded-lg border-2 border-white px-6 py-3 font-semibold hover:bg-white/10",
                            "View Events"
                        }
                    }
                }
            }
            section { class: "max-w-6xl mx-auto px-4 py-16",
                h2 { class: "text-3xl font-bold text-center mb-10", "What We Do" }
                div { class: "grid gap-8 md:grid-cols-3",
                    FeatureCard {
                        title: "Workshops",
                        description: "Hands-on sessions on machine learning, deep learning and the tools behind them.",
                        Icon { width: 32, height: 32, icon: FaLightbulb }
                    }
                    FeatureCard {
                        title: "Hackathons",
                        description: "Build real AI projects in teams and compete for prizes.",
                        Icon { width: 32, height: 32, icon: FaCode }
                    }
                    FeatureCard {
                        title: "Community",
                        description: "Meet fellow students, researchers and industry mentors who share your interests.",
                        Icon { width: 32, height: 32, icon: FaUsers }
                    }
                }
            }
        }
    )
}
