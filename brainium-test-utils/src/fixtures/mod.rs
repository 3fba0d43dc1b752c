//! Test fixture modules.
//!
//! - `registration` - valid team members, payloads and confirmation documents

pub mod registration;
