//! Age domain entity
//!
//! Completed years between a birth date and a reference date.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Age in completed years.
///
/// Only produced by [`compute_age`]. A birth date after the reference date
/// yields a negative value; no clamping is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Age(i32);

impl Age {
    pub fn years(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for Age {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Compute the number of completed years from `birth` to `today`.
///
/// The current year counts only once `(month, day)` of `today` has reached
/// `(month, day)` of `birth`.
pub fn compute_age(birth: NaiveDate, today: NaiveDate) -> Age {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    Age(years)
}
