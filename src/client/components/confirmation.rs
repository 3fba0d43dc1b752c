use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleCheck, FaDownload};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    model::registration::ConfirmationDto,
    registration::confirmation::{render_confirmation, QR_CODE_SIZE_PX},
};

/// Success view of the registration modal with the downloadable QR code.
#[component]
pub fn Confirmation(confirmation: ConfirmationDto, on_close: EventHandler<()>) -> Element {
    let image = use_memo(use_reactive!(|confirmation| {
        match render_confirmation(&confirmation) {
            Ok(image) => Some(image),
            Err(e) => {
                tracing::error!(
                    "Failed to render QR code for registration {}: {}",
                    confirmation.registration_id,
                    e
                );
                None
            }
        }
    }));

    rsx!(
        div { class: "flex flex-col items-center gap-4 text-center",
            Icon {
                width: 56,
                height: 56,
                class: "text-green-500",
                icon: FaCircleCheck
            }
            h3 { class: "text-2xl font-bold", "Registration Successful!" }
            p { class: "text-gray-600",
                "Team "
                span { class: "font-semibold", "{confirmation.team_name}" }
                " is registered for {confirmation.event_title}."
            }
            div { class: "rounded-lg bg-gray-100 px-4 py-2",
                p { class: "text-sm text-gray-500", "Registration ID" }
                p { class: "font-mono text-lg font-semibold", "{confirmation.registration_id}" }
            }
            if let Some(image) = image() {
                img {
                    src: "{image.data_url}",
                    alt: "Registration QR code",
                    width: QR_CODE_SIZE_PX,
                    height: QR_CODE_SIZE_PX,
                }
                a {
                    href: "{image.data_url}",
                    download: "{image.file_name}",
                    class: "inline-flex items-center gap-2 rounded-lg bg-blue-600 px-4 py-2 text-white hover:bg-blue-700",
                    Icon { width: 16, height: 16, icon: FaDownload }
                    "Download QR Code"
                }
            } else {
                p { class: "text-sm text-red-600",
                    "The QR code could not be generated, keep your registration ID for check-in."
                }
            }
            p { class: "text-sm text-gray-500",
                "Show this QR code at the event entrance for check-in."
            }
            button {
                class: "rounded-lg border border-gray-300 px-4 py-2 hover:bg-gray-50",
                onclick: move |_| on_close.call(()),
                "Close"
            }
        }
    )
}
