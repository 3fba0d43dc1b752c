use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{About, EventDetails, Events, Gallery, Home, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/about")]
    About {},

    #[route("/events")]
    Events {},

    #[route("/events/featured")]
    EventDetails {},

    #[route("/gallery")]
    Gallery {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
