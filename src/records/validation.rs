//! Field validators for new records.
//!
//! Each validator checks one field and returns the specific
//! [`ValidationError`] for the rule it violated. Callers run them in a fixed
//! order and stop at the first failure.

use once_cell::sync::Lazy;
use regex::Regex;
use time::{util::days_in_year_month, Month};

use crate::error::ValidationError;

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"^[a-zA-Z]+$"));

static DOB_PATTERN: Lazy<Regex> = Lazy::new(|| {
    compile(r"^(0[1-9]|[12][0-9]|3[01])-(0[1-9]|1[0-2])-([0-9]{4})$")
});

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

// Patterns are literals above; a failure here is a programming error.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static validation pattern must compile")
}

/// Accept names made of one or more ASCII letters.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::InvalidName)
    }
}

/// Accept `DD-MM-YYYY` dates that exist on the calendar.
///
/// The pattern bounds the day to 01-31 and the month to 01-12; the day is
/// then checked against the real length of that month, with February
/// following the Gregorian leap-year rule.
pub fn validate_date_of_birth(dob: &str) -> Result<(), ValidationError> {
    let caps = DOB_PATTERN
        .captures(dob)
        .ok_or(ValidationError::InvalidDateFormat)?;

    let day: u8 = parse_field(&caps[1])?;
    let month = Month::try_from(parse_field::<u8>(&caps[2])?)
        .map_err(|_| ValidationError::InvalidDateFormat)?;
    let year: i32 = parse_field(&caps[3])?;

    let max_day = match month {
        Month::February if is_leap_year(year) => 29,
        Month::February => 28,
        month => days_in_year_month(year, month),
    };

    if day <= max_day {
        return Ok(());
    }

    match month {
        Month::February => Err(ValidationError::InvalidFebruaryDate),
        month => Err(ValidationError::InvalidDayOfMonth { month }),
    }
}

/// Accept a single email-shaped username without consecutive dots.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if EMAIL_PATTERN.is_match(username) && !username.contains("..") {
        Ok(())
    } else {
        Err(ValidationError::InvalidUsernameFormat)
    }
}

/// Gregorian leap year: divisible by 4 and not by 100, unless by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn parse_field<T: std::str::FromStr>(digits: &str) -> Result<T, ValidationError> {
    digits
        .parse()
        .map_err(|_| ValidationError::InvalidDateFormat)
}
