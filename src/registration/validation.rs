//! Field validators for the team registration form.
//!
//! Every input of the form maps to a [`FieldKind`] and each kind owns exactly one rule, so
//! leader and member fields are held to the same standard. Validators are pure: they never
//! touch form state, callers attach the result to a [`FieldKey`](super::form::FieldKey).

use lazy_static::lazy_static;
use regex::Regex;

use crate::{error::FieldError, model::registration::Semester};

/// Minimum number of characters in a member name, applies to the leader as well.
pub const MIN_NAME_LEN: usize = 2;

/// Number of digits in a phone number.
pub const PHONE_DIGITS: usize = 10;

lazy_static! {
    static ref INSTITUTIONAL_ID_REGEX: Regex =
        Regex::new(r"(?i)^1(BY|TD)\d{2}[A-Z]{2}\d{3}$").unwrap();
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref PHONE_REGEX: Regex = Regex::new(r"^[6-9]\d{9}$").unwrap();
}

/// The kinds of input collected by the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    TeamName,
    Name,
    Semester,
    InstitutionalId,
    Email,
    Phone,
}

impl FieldKind {
    /// Label used in validation messages and form labels.
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::TeamName => "Team name",
            FieldKind::Name => "Name",
            FieldKind::Semester => "Semester",
            FieldKind::InstitutionalId => "USN",
            FieldKind::Email => "Email",
            FieldKind::Phone => "Phone number",
        }
    }
}

/// Validates `value` against the rule for `kind`.
///
/// # Returns
/// - `Ok(())` - The value is acceptable
/// - `Err(FieldError::Required)` - The value is blank
/// - `Err(FieldError::TooShort | LettersOnly | InvalidFormat)` - The value is present but malformed
pub fn validate(kind: FieldKind, value: &str) -> Result<(), FieldError> {
    let label = kind.label();
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(FieldError::Required(label));
    }

    match kind {
        FieldKind::TeamName => Ok(()),
        FieldKind::Name => validate_name(trimmed, label),
        FieldKind::Semester => match Semester::parse(trimmed) {
            Some(_) => Ok(()),
            None => Err(FieldError::InvalidFormat {
                field: label,
                hint: "semester 1, 3 or 5",
            }),
        },
        FieldKind::InstitutionalId => matches_or(
            &INSTITUTIONAL_ID_REGEX,
            trimmed,
            label,
            "a USN like 1BY23AI045",
        ),
        FieldKind::Email => matches_or(&EMAIL_REGEX, trimmed, label, "an address like name@example.com"),
        FieldKind::Phone => matches_or(
            &PHONE_REGEX,
            trimmed,
            label,
            "10 digits starting with 6, 7, 8 or 9",
        ),
    }
}

fn validate_name(name: &str, label: &'static str) -> Result<(), FieldError> {
    if name.chars().count() < MIN_NAME_LEN {
        return Err(FieldError::TooShort {
            field: label,
            min: MIN_NAME_LEN,
        });
    }

    if !name.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(FieldError::LettersOnly(label));
    }

    Ok(())
}

fn matches_or(
    regex: &Regex,
    value: &str,
    label: &'static str,
    hint: &'static str,
) -> Result<(), FieldError> {
    if regex.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::InvalidFormat { field: label, hint })
    }
}

/// Institutional IDs are stored uppercased as they are typed.
pub fn normalize_institutional_id(value: &str) -> String {
    value.to_uppercase()
}

/// Keeps only the first [`PHONE_DIGITS`] digit characters of a typed or pasted value.
pub fn normalize_phone(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect()
}
