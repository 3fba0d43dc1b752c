//! Registration identifier generation.

use chrono::{DateTime, Utc};
use rand::Rng;

pub const REGISTRATION_ID_PREFIX: &str = "BRA";

/// Number of base36 characters in the random suffix.
const RANDOM_SUFFIX_LEN: u32 = 5;

const BASE36_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generates an identifier of the form `BRA-<timestamp>-<suffix>`.
///
/// The timestamp is `now` in milliseconds since the Unix epoch and the suffix is
/// [`RANDOM_SUFFIX_LEN`] random characters, both uppercase base36.
///
/// # Example
/// ```ignore
/// let id = generate_registration_id(Utc::now(), &mut rand::rng());
/// // e.g. "BRA-MGXHR6O0-4K2ZQ"
/// ```
pub fn generate_registration_id<R: Rng>(now: DateTime<Utc>, rng: &mut R) -> String {
    // Timestamps before the epoch only occur with a broken clock
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or_default();
    let suffix = rng.random_range(0..36u64.pow(RANDOM_SUFFIX_LEN));

    format!(
        "{}-{}-{:0>width$}",
        REGISTRATION_ID_PREFIX,
        to_base36(millis),
        to_base36(suffix),
        width = RANDOM_SUFFIX_LEN as usize
    )
}

/// Uppercase base36 rendering of `value`.
pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();

    String::from_utf8_lossy(&digits).into_owned()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rand::{rngs::StdRng, SeedableRng};
    use regex::Regex;

    use super::*;

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "Z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_295), "ZZ");
    }

    #[test]
    fn test_generated_id_shape() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let id = generate_registration_id(now, &mut rng);

        let pattern = Regex::new(r"^BRA-[0-9A-Z]+-[0-9A-Z]{5}$").unwrap();
        assert!(pattern.is_match(&id), "{id}");
        assert!(id.starts_with(&format!("BRA-{}-", to_base36(now.timestamp_millis() as u64))));
    }

    #[test]
    fn test_ids_differ_between_draws() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let first = generate_registration_id(now, &mut rng);
        let second = generate_registration_id(now, &mut rng);

        assert_ne!(first, second);
    }
}
