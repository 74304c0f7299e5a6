//! Wall-clock source for time-dependent commands.

use chrono::{DateTime, FixedOffset, Local};

/// Format used by `date`, e.g. `Mon Oct 19 2026 14:03:07 GMT+0530`.
pub const DATE_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Source of the current time.
pub trait Clock {
    /// Current time with its UTC offset.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The host's local clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let now = Local::now();
        now.with_timezone(now.offset())
    }
}

/// Render a time the way `date` prints it.
pub fn format_date(at: &DateTime<FixedOffset>) -> String {
    at.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FixedClock;

    #[test]
    fn format_matches_browser_style() {
        let clock = FixedClock::at("2026-10-19T14:03:07+05:30");
        assert_eq!(format_date(&clock.now()), "Mon Oct 19 2026 14:03:07 GMT+0530");
    }

    #[test]
    fn format_negative_offset() {
        let clock = FixedClock::at("2024-02-29T23:59:59-08:00");
        assert_eq!(format_date(&clock.now()), "Thu Feb 29 2024 23:59:59 GMT-0800");
    }

    #[test]
    fn system_clock_is_recent() {
        let now = SystemClock.now();
        assert!(now.timestamp() > 1_700_000_000);
    }
}
