//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod system_clock;

pub use system_clock::SystemClock;
