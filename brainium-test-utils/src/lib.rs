//! Shared fixtures for Brainium integration tests.
//!
//! - [`builder::RegistrationBuilder`] - declarative setup of a registration session
//! - [`fixtures`] - canonical valid form values and wire documents
//! - [`mock::MockBackend`] - a recording [`RegistrationBackend`](brainium::registration::RegistrationBackend)

pub mod builder;
pub mod error;
pub mod fixtures;
pub mod mock;

pub use builder::RegistrationBuilder;
pub use error::TestError;
pub use mock::MockBackend;

pub mod prelude {
    pub use crate::{
        fixtures::registration as factory, MockBackend, RegistrationBuilder, TestError,
    };
}
