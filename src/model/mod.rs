pub mod api;
pub mod event;
pub mod gallery;
pub mod registration;
pub mod team;
