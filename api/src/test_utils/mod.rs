//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The clock is the only port, so a fixed-date implementation is enough to
//! drive the whole router deterministically.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
