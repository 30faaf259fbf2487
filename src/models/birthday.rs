//! Birthday model
//!
//! A birthday is a naive calendar date. Users enter and see it as `DD.MM.YYYY`;
//! on disk it is stored as an ISO date through chrono's serde support.
//!
//! # Leap days
//!
//! When the month/day of a birthday does not exist in a given year (Feb 29 in a
//! non-leap year) the anniversary is clamped to the last valid day of that
//! month, so a Feb 29 birthday is celebrated on Feb 28.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ContactsError, ContactsResult};

/// Text format used for parsing and display
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A contact's date of birth
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse a birthday from `DD.MM.YYYY` text
    pub fn parse(text: &str) -> ContactsResult<Self> {
        NaiveDate::parse_from_str(text.trim(), BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ContactsError::InvalidDate {
                input: text.to_string(),
            })
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The birthday's month/day placed in `year`, clamped to the end of the month
    ///
    /// Returns `None` only when `year` is outside chrono's representable range.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        let (month, day) = (self.0.month(), self.0.day());
        (1..=day)
            .rev()
            .find_map(|d| NaiveDate::from_ymd_opt(year, month, d))
    }

    /// The first anniversary on or after `reference`
    pub fn next_anniversary(&self, reference: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.anniversary_in(reference.year())?;
        if this_year < reference {
            self.anniversary_in(reference.year() + 1)
        } else {
            Some(this_year)
        }
    }

    /// Days from `reference` until the next anniversary (0 when it is today)
    pub fn days_until_next(&self, reference: NaiveDate) -> Option<i64> {
        self.next_anniversary(reference)
            .map(|next| (next - reference).num_days())
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let birthday = Birthday::parse("15.03.1990").unwrap();
        assert_eq!(birthday.date(), date(1990, 3, 15));
        assert_eq!(birthday.to_string(), "15.03.1990");
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        for input in ["1990-03-15", "31.02.1990", "15/03/1990", "", "tomorrow"] {
            assert!(
                matches!(
                    Birthday::parse(input),
                    Err(ContactsError::InvalidDate { .. })
                ),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn test_days_until_next_same_year() {
        let birthday = Birthday::parse("15.03.1990").unwrap();
        assert_eq!(birthday.days_until_next(date(2024, 3, 10)), Some(5));
        assert_eq!(birthday.days_until_next(date(2024, 3, 15)), Some(0));
    }

    #[test]
    fn test_days_until_next_wraps_to_next_year() {
        let birthday = Birthday::parse("15.03.1990").unwrap();
        let reference = date(2024, 3, 20);
        let expected = (date(2025, 3, 15) - reference).num_days();
        assert_eq!(birthday.days_until_next(reference), Some(expected));
        assert_eq!(expected, 360);
    }

    #[test]
    fn test_days_until_next_across_new_year() {
        let birthday = Birthday::parse("02.01.1985").unwrap();
        assert_eq!(birthday.days_until_next(date(2023, 12, 30)), Some(3));
    }

    #[test]
    fn test_leap_day_clamps_to_feb_28() {
        let birthday = Birthday::parse("29.02.2000").unwrap();

        assert_eq!(birthday.anniversary_in(2023), Some(date(2023, 2, 28)));
        assert_eq!(birthday.anniversary_in(2024), Some(date(2024, 2, 29)));

        assert_eq!(birthday.days_until_next(date(2023, 2, 20)), Some(8));
        assert_eq!(birthday.days_until_next(date(2024, 2, 20)), Some(9));
        assert_eq!(birthday.days_until_next(date(2023, 2, 28)), Some(0));
    }

    #[test]
    fn test_leap_day_after_clamped_date_rolls_to_next_year() {
        let birthday = Birthday::parse("29.02.2000").unwrap();
        // 2024 is a leap year, so the next anniversary is the real Feb 29
        assert_eq!(birthday.next_anniversary(date(2023, 3, 1)), Some(date(2024, 2, 29)));
        assert_eq!(birthday.days_until_next(date(2023, 3, 1)), Some(365));
    }

    #[test]
    fn test_serde_uses_iso_date() {
        let birthday = Birthday::parse("15.03.1990").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, r#""1990-03-15""#);

        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);
    }
}
