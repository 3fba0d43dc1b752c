pub mod backend_notice;
pub mod confirmation;
pub mod event_details_modal;
pub mod member_fields;
pub mod navbar;
pub mod page;
pub mod registration_modal;

pub use backend_notice::BackendNotice;
pub use confirmation::Confirmation;
pub use event_details_modal::EventDetailsModal;
pub use navbar::Navbar;
pub use page::Page;
pub use registration_modal::RegistrationModal;
