//! Tests for the team registration flow.
//!
//! This module contains integration tests driving the public registration API the way the
//! registration modal and the event page do: filling and submitting a session against a
//! backend, rendering the confirmation and resolving the participant count.

mod confirmation;
mod participant_count;
mod submission;

use brainium_test_utils::prelude::*;
