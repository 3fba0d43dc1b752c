use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronLeft, FaChevronRight, FaXmark};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::Page,
        util::carousel::{next_image, prev_image},
    },
    model::gallery::{filter_albums, GalleryImage, GALLERY},
};

fn chip_class(active: bool) -> &'static str {
    if active {
        "rounded-full bg-blue-600 px-4 py-2 text-white"
    } else {
        "rounded-full bg-gray-200 px-4 py-2 hover:bg-gray-300"
    }
}

#[component]
pub fn Gallery() -> Element {
    let mut filter = use_signal(|| None::<&'static str>);
    let mut lightbox = use_signal(|| None::<usize>);

    // Flattened in display order so the lightbox can step across albums
    let images: Vec<(&'static str, &'static GalleryImage)> = filter_albums(filter())
        .into_iter()
        .flat_map(|album| album.images.iter().map(move |image| (album.event, image)))
        .collect();
    let total = images.len();

    let mut select_filter = move |event: Option<&'static str>| {
        filter.set(event);
        lightbox.set(None);
    };

    rsx!(
        Title { "Gallery | Brainium" }
        Meta {
            name: "description",
            content: "Photos from past Brainium events."
        }
        Page {
            section { class: "max-w-6xl mx-auto px-4 py-12",
                h1 { class: "text-4xl font-bold text-center mb-8", "Gallery" }
                div { class: "flex flex-wrap justify-center gap-2 mb-8",
                    button {
                        class: chip_class(filter().is_none()),
                        onclick: move |_| select_filter(None),
                        "All Events"
                    }
                    for album in GALLERY {
                        button {
                            key: "{album.event}",
                            class: chip_class(filter() == Some(album.event)),
                            onclick: move |_| select_filter(Some(album.event)),
                            "{album.event}"
                        }
                    }
                }
                div { class: "grid gap-4 sm:grid-cols-2 md:grid-cols-3",
                    for (index, (event, image)) in images.iter().enumerate() {
                        button {
                            key: "{image.url}",
                            class: "group relative overflow-hidden rounded-xl shadow-md",
                            onclick: move |_| lightbox.set(Some(index)),
                            img {
                                class: "h-56 w-full object-cover transition group-hover:scale-105",
                                src: image.url,
                                alt: image.caption,
                            }
                            div { class: "absolute inset-x-0 bottom-0 bg-gradient-to-t from-black/70 p-3 text-left text-white",
                                p { class: "font-semibold", "{image.caption}" }
                                p { class: "text-xs opacity-80", "{event}" }
                            }
                        }
                    }
                }
            }
        }
        if let Some((index, (event, image))) = lightbox().and_then(|index| images.get(index).map(|entry| (index, *entry))) {
            div {
                class: "modal-backdrop flex items-center justify-center p-4",
                onclick: move |_| lightbox.set(None),
                div {
                    class: "relative flex max-w-4xl flex-col items-center gap-3",
                    onclick: move |evt| evt.stop_propagation(),
                    img { class: "max-h-[75vh] rounded-lg object-contain", src: image.url, alt: image.caption }
                    p { class: "text-white font-semibold", "{image.caption}" }
                    p { class: "text-sm text-gray-300", "{event} · {index + 1} / {total}" }
                    button {
                        class: "absolute top-2 right-2 rounded-full bg-white/80 p-2 hover:bg-white",
                        aria_label: "Close",
                        onclick: move |_| lightbox.set(None),
                        Icon { width: 18, height: 18, icon: FaXmark }
                    }
                    button {
                        class: "absolute left-2 top-1/2 -translate-y-1/2 rounded-full bg-white/80 p-3 hover:bg-white",
                        aria_label: "Previous image",
                        onclick: move |_| lightbox.set(Some(prev_image(index, total))),
                        Icon { width: 16, height: 16, icon: FaChevronLeft }
                    }
                    button {
                        class: "absolute right-2 top-1/2 -translate-y-1/2 rounded-full bg-white/80 p-3 hover:bg-white",
                        aria_label: "Next image",
                        onclick: move |_| lightbox.set(Some(next_image(index, total))),
                        Icon { width: 16, height: 16, icon: FaChevronRight }
                    }
                }
            }
        }
    )
}
