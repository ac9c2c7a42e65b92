//! Render module
//!
//! Turns a computed age into the two response payloads: the greeting
//! message and the spreadsheet record.

pub mod greeting;
pub mod spreadsheet;

pub use greeting::render_greeting;
pub use spreadsheet::{render_spreadsheet, SPREADSHEET_CONTENT_TYPE, SPREADSHEET_FILENAME};
