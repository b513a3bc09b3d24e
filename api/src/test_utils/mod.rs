//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Manual mocks instead of mockall: the port traits take `&str` parameters and
//! return owned data, and an in-memory store is easier to assert against.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
