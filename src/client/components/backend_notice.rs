use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaTriangleExclamation, FaXmark};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::util::sleep_ms,
    registration::{
        advisory::{ADVISORY_DISMISS_AFTER_MS, ADVISORY_MESSAGE, ADVISORY_TITLE},
        AdvisoryNotice,
    },
};

/// Shows the advisory notice and schedules its auto-dismissal.
///
/// The timer task belongs to the calling component and is dropped if it unmounts first.
pub fn raise_advisory(mut notice: Signal<AdvisoryNotice>) {
    let generation = notice.write().raise(Utc::now());

    spawn(async move {
        let mut wait = ADVISORY_DISMISS_AFTER_MS;

        // Timers may fire early, sleep again until the dismissal is actually due
        loop {
            sleep_ms(wait).await;

            let now = Utc::now();
            match notice.peek().pending_dismissal(generation, now) {
                None => return,
                Some(0) => break,
                Some(remaining) => wait = remaining,
            }
        }

        if notice.write().expire(generation, Utc::now()) {
            tracing::debug!("Advisory notice {} auto-dismissed", generation);
        }
    });
}

#[component]
pub fn BackendNotice(notice: Signal<AdvisoryNotice>) -> Element {
    if !notice.read().is_visible() {
        return rsx!();
    }

    rsx!(
        div {
            class: "advisory-notice fixed top-20 right-4 z-50 max-w-sm rounded-lg border border-yellow-300 bg-yellow-50 p-4 shadow-lg",
            role: "status",
            div { class: "flex items-start gap-3",
                Icon {
                    width: 20,
                    height: 20,
                    class: "text-yellow-600 mt-0.5",
                    icon: FaTriangleExclamation
                }
                div { class: "flex-1",
                    p { class: "font-semibold text-yellow-800", "{ADVISORY_TITLE}" }
                    p { class: "text-sm text-yellow-700", "{ADVISORY_MESSAGE}" }
                }
                button {
                    class: "text-yellow-700 hover:text-yellow-900",
                    aria_label: "Dismiss",
                    onclick: move |_| notice.write().dismiss(),
                    Icon { width: 16, height: 16, icon: FaXmark }
                }
            }
        }
    )
}
