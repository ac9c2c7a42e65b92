//! Person domain entity
//!
//! The validated contents of an age or export request.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::DomainError;

/// Wire format of birth dates: locale-free `YYYY-MM-DD`.
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar birth date parsed from `YYYY-MM-DD`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthDate(pub NaiveDate);

impl BirthDate {
    pub fn date(self) -> NaiveDate {
        self.0
    }
}

impl std::str::FromStr for BirthDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono's %Y also takes signs, short and long years; only a plain
        // four-digit year is part of the format.
        if !has_birth_date_shape(s) {
            return Err(DomainError::MalformedBirthDate {
                input: s.to_string(),
            });
        }

        NaiveDate::parse_from_str(s, BIRTH_DATE_FORMAT)
            .map(BirthDate)
            .map_err(|source| DomainError::InvalidBirthDate {
                input: s.to_string(),
                source,
            })
    }
}

/// Four ASCII digits, then one or two for month and day, separated by `-`
fn has_birth_date_shape(s: &str) -> bool {
    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };

    let mut parts = s.split('-');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day), None) => {
            digits(year, 4, 4) && digits(month, 1, 2) && digits(day, 1, 2)
        }
        _ => false,
    }
}

impl std::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(BIRTH_DATE_FORMAT))
    }
}

/// A person whose age is requested
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonRecord {
    pub name: String,
    pub surname: String,
    pub birth_date: BirthDate,
}
