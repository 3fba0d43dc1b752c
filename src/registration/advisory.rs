//! "Backend not connected" advisory notice.
//!
//! Raised whenever the site runs without a reachable endpoint: submissions that were only
//! stubbed and participant counts that fell back to the assumed value. The notice hides
//! itself [`ADVISORY_DISMISS_AFTER_MS`] after the latest raise unless closed manually first.
//! Every raise bumps a generation counter so a timer started by an older raise cannot hide
//! a notice that was raised again in the meantime.

use chrono::{DateTime, Duration, Utc};

pub const ADVISORY_DISMISS_AFTER_MS: u32 = 8_000;

pub const ADVISORY_TITLE: &str = "Backend Not Connected";
pub const ADVISORY_MESSAGE: &str = "Registration data may not sync. Contact admin if needed.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdvisoryNotice {
    visible: bool,
    generation: u64,
    raised_at: Option<DateTime<Utc>>,
}

impl AdvisoryNotice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the notice and returns the generation the dismissal timer must present.
    pub fn raise(&mut self, now: DateTime<Utc>) -> u64 {
        self.visible = true;
        self.generation += 1;
        self.raised_at = Some(now);
        self.generation
    }

    /// Manual close.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Milliseconds left before the raise identified by `generation` may be auto-dismissed.
    ///
    /// # Returns
    /// - `Some(0)` - The dismissal is due
    /// - `Some(ms)` - The dismissal is due in `ms` milliseconds
    /// - `None` - The notice is hidden or was raised again since, the timer can stop
    pub fn pending_dismissal(&self, generation: u64, now: DateTime<Utc>) -> Option<u32> {
        if !self.visible || self.generation != generation {
            return None;
        }

        let raised_at = self.raised_at?;
        let remaining = Duration::milliseconds(i64::from(ADVISORY_DISMISS_AFTER_MS)) - (now - raised_at);

        Some(u32::try_from(remaining.num_milliseconds().max(0)).unwrap_or(ADVISORY_DISMISS_AFTER_MS))
    }

    /// Auto-dismissal for the raise identified by `generation`.
    ///
    /// # Returns
    /// - `true` - The notice was hidden
    /// - `false` - The dismissal is not due yet, the notice was raised again since, or it is
    ///   already hidden
    pub fn expire(&mut self, generation: u64, now: DateTime<Utc>) -> bool {
        if self.pending_dismissal(generation, now) == Some(0) {
            self.visible = false;
            true
        } else {
            false
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_hidden_until_raised() {
        let notice = AdvisoryNotice::new();
        assert!(!notice.is_visible());
        assert_eq!(notice.pending_dismissal(0, t0()), None);
    }

    #[test]
    fn test_expire_waits_eight_seconds() {
        let mut notice = AdvisoryNotice::new();
        let generation = notice.raise(t0());

        assert!(!notice.expire(generation, t0()));
        assert!(!notice.expire(generation, t0() + Duration::milliseconds(7_999)));
        assert!(notice.is_visible());

        assert!(notice.expire(generation, t0() + Duration::seconds(8)));
        assert!(!notice.is_visible());
    }

    #[test]
    fn test_pending_dismissal_counts_down() {
        let mut notice = AdvisoryNotice::new();
        let generation = notice.raise(t0());

        assert_eq!(
            notice.pending_dismissal(generation, t0()),
            Some(ADVISORY_DISMISS_AFTER_MS)
        );
        assert_eq!(
            notice.pending_dismissal(generation, t0() + Duration::milliseconds(7_990)),
            Some(10)
        );
        assert_eq!(
            notice.pending_dismissal(generation, t0() + Duration::seconds(30)),
            Some(0)
        );
    }

    #[test]
    fn test_manual_dismiss_hides_immediately() {
        let mut notice = AdvisoryNotice::new();
        let generation = notice.raise(t0());

        notice.dismiss();

        assert!(!notice.is_visible());
        assert_eq!(notice.pending_dismissal(generation, t0()), None);
        assert!(!notice.expire(generation, t0() + Duration::seconds(8)));
    }

    #[test]
    fn test_stale_timer_does_not_hide_newer_raise() {
        let mut notice = AdvisoryNotice::new();
        let first = notice.raise(t0());
        let second = notice.raise(t0() + Duration::seconds(5));

        assert!(!notice.expire(first, t0() + Duration::seconds(8)));
        assert_eq!(notice.pending_dismissal(first, t0() + Duration::seconds(8)), None);
        assert!(notice.is_visible());

        assert!(!notice.expire(second, t0() + Duration::seconds(9)));
        assert!(notice.expire(second, t0() + Duration::seconds(13)));
        assert!(!notice.is_visible());
    }
}
