//! Registration availability for the featured event.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStatus {
    Open,
    /// The registration deadline has passed
    Closed,
    /// Every team spot is taken
    Full,
}

/// Decides whether registration is offered.
///
/// Closing takes precedence over capacity: past the deadline registration is `Closed`
/// regardless of how many teams registered.
pub fn registration_status(
    now: DateTime<Utc>,
    deadline: DateTime<Utc>,
    registered: u32,
    max_participants: u32,
) -> RegistrationStatus {
    if now > deadline {
        RegistrationStatus::Closed
    } else if registered >= max_participants {
        RegistrationStatus::Full
    } else {
        RegistrationStatus::Open
    }
}

pub fn spots_remaining(registered: u32, max_participants: u32) -> u32 {
    max_participants.saturating_sub(registered)
}

/// Share of spots taken, clamped to `0.0..=100.0` for the capacity bar.
pub fn fill_percent(registered: u32, max_participants: u32) -> f64 {
    if max_participants == 0 {
        return 100.0;
    }

    (f64::from(registered) / f64::from(max_participants) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn deadline() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 12, 10, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_open_before_deadline_with_capacity() {
        let now = deadline() - Duration::days(1);
        assert_eq!(
            registration_status(now, deadline(), 10, 200),
            RegistrationStatus::Open
        );
    }

    #[test]
    fn test_open_exactly_at_deadline() {
        assert_eq!(
            registration_status(deadline(), deadline(), 10, 200),
            RegistrationStatus::Open
        );
    }

    #[test]
    fn test_closed_after_deadline_even_when_full() {
        let now = deadline() + Duration::seconds(1);
        assert_eq!(
            registration_status(now, deadline(), 10, 200),
            RegistrationStatus::Closed
        );
        assert_eq!(
            registration_status(now, deadline(), 200, 200),
            RegistrationStatus::Closed
        );
    }

    #[test]
    fn test_full_at_capacity() {
        let now = deadline() - Duration::hours(1);
        assert_eq!(
            registration_status(now, deadline(), 200, 200),
            RegistrationStatus::Full
        );
        assert_eq!(
            registration_status(now, deadline(), 250, 200),
            RegistrationStatus::Full
        );
    }

    #[test]
    fn test_spots_remaining_saturates() {
        assert_eq!(spots_remaining(5, 200), 195);
        assert_eq!(spots_remaining(250, 200), 0);
    }

    #[test]
    fn test_fill_percent() {
        assert_eq!(fill_percent(50, 200), 25.0);
        assert_eq!(fill_percent(300, 200), 100.0);
        assert_eq!(fill_percent(0, 0), 100.0);
    }
}
