//! Clock port trait
//!
//! Source of the reference date used as "today" in age calculations.

use chrono::NaiveDate;

/// Provides the current calendar date
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
