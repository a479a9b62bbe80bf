//! Providers of "now" for time-relative queries.

use chrono::{DateTime, FixedOffset, Local};

use crate::model::YearMonth;

pub trait ClockSource {
    fn now(&self) -> DateTime<FixedOffset>;

    /// Year and month of [`ClockSource::now`], in the clock's own offset.
    fn current_year_month(&self) -> YearMonth {
        YearMonth::of(&self.now())
    }
}

impl<T: ClockSource + ?Sized> ClockSource for &T {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }

    fn current_year_month(&self) -> YearMonth {
        (**self).current_year_month()
    }
}

/// Reads the local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self { now }
    }
}

impl ClockSource for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_reports_its_instant() {
        let now = DateTime::parse_from_rfc3339("2024-03-10T00:00:00+01:00").unwrap();
        let clock = FixedClock::new(now);
        assert_eq!(clock.now(), now);
        assert_eq!(clock.current_year_month(), YearMonth::new(2024, 3).unwrap());
    }

    #[test]
    fn test_current_year_month_follows_clock_offset() {
        // 2024-03-31 23:30 at -01:00 is already April in UTC
        let now = DateTime::parse_from_rfc3339("2024-03-31T23:30:00-01:00").unwrap();
        let clock = FixedClock::new(now);
        assert_eq!(clock.current_year_month(), YearMonth::new(2024, 3).unwrap());
    }

    #[test]
    fn test_system_clock_is_close_to_utc_now() {
        let before = chrono::Utc::now();
        let now = SystemClock.now();
        let after = chrono::Utc::now();
        assert!(before <= now && now <= after);
    }
}
