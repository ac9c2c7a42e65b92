//! Test fixtures
//!
//! Factory functions for creating test data and an app wired to a fixed
//! date, plus a reader for generated workbooks.

use std::io::Cursor;
use std::sync::Arc;

use axum::Router;
use calamine::{Data, Reader, Xlsx};
use chrono::NaiveDate;

use crate::app::{PersonInput, PersonService};
use crate::domain::entities::{compute_age, Age};
use crate::routes::build_router;
use crate::test_utils::FixedClock;
use crate::AppState;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// An age of exactly `years`, computed on a birthday
pub fn age_of(years: i32) -> Age {
    compute_age(date(2000 - years, 6, 1), date(2000, 6, 1))
}

pub fn person_input(name: &str, surname: &str, birth_date: &str) -> PersonInput {
    PersonInput {
        name: Some(name.to_string()),
        surname: Some(surname.to_string()),
        birth_date: Some(birth_date.to_string()),
    }
}

/// Application state whose clock always reports `today`
pub fn test_state(today: NaiveDate, reject_future_birth_dates: bool) -> AppState {
    AppState {
        person_service: Arc::new(PersonService::new(
            Arc::new(FixedClock::new(today)),
            reject_future_birth_dates,
        )),
    }
}

/// Full router whose clock always reports `today`
pub fn test_router(today: NaiveDate) -> Router {
    build_router(test_state(today, false))
}

/// Contents of a generated workbook
#[derive(Debug)]
pub struct SheetContents {
    pub sheet_names: Vec<String>,
    pub rows: Vec<Vec<Data>>,
}

/// Read every sheet name and the rows of the first sheet
pub fn read_spreadsheet(bytes: &[u8]) -> SheetContents {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes.to_vec())).unwrap();
    let sheet_names = workbook.sheet_names();
    let range = workbook.worksheet_range(&sheet_names[0]).unwrap();
    let rows = range.rows().map(|row| row.to_vec()).collect();

    SheetContents { sheet_names, rows }
}
