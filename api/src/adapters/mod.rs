//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod postgres;
pub mod system_clock;

pub use postgres::{PostgresDepartmentRepository, PostgresEmployeeRepository};
pub use system_clock::SystemClock;
