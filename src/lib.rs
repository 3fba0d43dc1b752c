//! Brainium club website.
//!
//! A client-rendered Dioxus application serving the club's informational pages together with
//! the team event registration flow. Registration logic (validation, form state, submission,
//! confirmation QR codes, capacity status) lives in [`registration`] and is free of any UI
//! dependency so it can be exercised natively in tests; [`client`] wires it into components.

#![allow(non_snake_case)]

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod registration;
