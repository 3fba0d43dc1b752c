use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{client::router::Route, config::Config};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[component]
pub fn App() -> Element {
    // Build-time configuration, a bad endpoint value degrades to running without a backend
    use_context_provider(|| match Config::from_env() {
        Ok(config) => {
            if !config.is_backend_configured() {
                tracing::warn!("Registration endpoint not configured, submissions will be stubbed");
            }
            config
        }
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            Config::default()
        }
    });

    rsx!(
        document::Script { src: TAILWIND_CDN }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    )
}
