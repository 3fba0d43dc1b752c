pub mod about;
pub mod event_details;
pub mod events;
pub mod gallery;
pub mod home;
pub mod not_found;

pub use about::About;
pub use event_details::EventDetails;
pub use events::Events;
pub use gallery::Gallery;
pub use home::Home;
pub use not_found::NotFound;
