//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod department_service;
pub mod employee_service;
pub mod idempotency;
pub mod salary_rules;

// Outcome types are part of the service API even where only tests inspect them
#[allow(unused_imports)]
pub use department_service::{DeletionOutcome, DepartmentService, RemovedEmployee};
#[allow(unused_imports)]
pub use employee_service::{
    AdjustmentOutcome, AdjustmentStatus, EmployeeAdjustment, EmployeeService,
};
pub use idempotency::{IdempotencyGuard, ADJUSTMENT_COOLDOWN_SECS};
// Re-export salary rule constants for public API
#[allow(unused_imports)]
pub use salary_rules::*;
