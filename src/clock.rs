//! Injectable source of "today"
//!
//! Age checks are the only time-dependent rules. They read the current date
//! through a [`Clock`] so tests can pin it.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rulechain::{Clock, FixedClock};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! assert_eq!(FixedClock::new(today).today(), today);
//!
//! // Any `Fn() -> NaiveDate` is a clock too.
//! let clock = move || today;
//! assert_eq!(clock.today(), today);
//! ```

use chrono::{Local, NaiveDate};

/// Provides the date against which ages are measured.
pub trait Clock: Send + Sync {
    /// The current calendar date.
    fn today(&self) -> NaiveDate;
}

impl<F> Clock for F
where
    F: Fn() -> NaiveDate + Send + Sync,
{
    #[inline]
    fn today(&self) -> NaiveDate {
        self()
    }
}

/// Reads the local system date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    /// A clock frozen at `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    #[inline]
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_is_fixed() {
        let day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let clock = FixedClock::new(day);
        assert_eq!(clock.today(), day);
        assert_eq!(clock.today(), day);
    }

    #[test]
    fn system_clock_is_after_epoch() {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert!(SystemClock.today() > epoch);
    }
}
