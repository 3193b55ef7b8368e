//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - The in-memory repositories enforce the same uniqueness rules as the
//!   database, which a generated mock would not
//! - Failure injection (`failing_salary_update_for`, `failing_next_delete`)
//!   stays readable at the call site
//! - `ManualClock` lets tests move time across cooldowns and tenure thresholds

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
