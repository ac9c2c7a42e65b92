//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod age;
pub mod export;

pub use age::{calculate_age, PersonRequest};
pub use export::export_excel;
