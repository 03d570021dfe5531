//! Test utilities for se-mock-events
//!
//! Fixtures and deterministic sources shared by the unit tests.

pub mod fixtures;

pub use fixtures::*;
