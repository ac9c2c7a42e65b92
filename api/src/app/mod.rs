//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and renderers.

pub mod person_service;

pub use person_service::{PersonInput, PersonService};
