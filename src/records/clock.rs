//! Calendar date source for joining stamps.

use chrono::{Local, NaiveDate};

/// Wire format for `dob` and `doj`.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Supplies "today" to the record assembler.
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Current calendar date.
    fn today(&self) -> NaiveDate;
}

/// Server local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date. Used in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Format a date as `DD-MM-YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
