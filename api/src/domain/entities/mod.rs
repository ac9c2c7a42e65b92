//! Domain entities
//!
//! Transient, request-scoped models. Nothing here is persisted.

pub mod age;
pub mod person;

pub use age::{compute_age, Age};
pub use person::{BirthDate, PersonRecord};
