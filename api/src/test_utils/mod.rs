//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - mockall has lifetime issues with traits containing `&str` parameters
//! - Manual mocks are more explicit and easier to debug
//! - The in-memory appointment store can model the database's partial
//!   unique index (check-and-insert under one lock), which the conflict
//!   tests depend on

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
