//! Clock seam for date-dependent store behavior.

use chrono::{NaiveDate, Utc};

/// Source of "today" for allocation start/end dates.
///
/// The store reads dates through this trait so tests can pin the calendar.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation used outside tests.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock frozen at a fixed date, for deterministic tests and demos.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
