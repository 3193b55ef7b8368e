//! Employee domain entity
//!
//! An employee always belongs to exactly one department.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DepartmentId;
use crate::error::DomainError;

/// Unique identifier for an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub Uuid);

impl EmployeeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for EmployeeId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An employee assigned to a department
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub salary: Decimal,
    pub joining_date: NaiveDate,
    pub department_id: DepartmentId,
}

/// Employee together with the name of its department, for read models
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeDetails {
    pub employee: Employee,
    pub department_name: String,
}

/// Fractional digits stored for money values (`numeric(12, 2)`)
pub const SALARY_SCALE: u32 = 2;

/// Smallest accepted salary, in cents
const MIN_SALARY_CENTS: i64 = 1;

/// Largest salary the `numeric(12, 2)` column holds, in cents
const MAX_SALARY_CENTS: i64 = 9_999_999_999_99;

/// Data needed to create or replace an employee
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub salary: Decimal,
    pub joining_date: NaiveDate,
    pub department_id: DepartmentId,
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

/// Whether `email` looks like a deliverable address
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

impl NewEmployee {
    /// Check field-level constraints against `today`, collecting every violation
    pub fn validate(&self, today: NaiveDate) -> Result<(), DomainError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("name: Employee name is required".to_string());
        }
        if self.email.trim().is_empty() {
            errors.push("email: Email is required".to_string());
        } else if !is_valid_email(&self.email) {
            errors.push("email: Invalid email format".to_string());
        }
        if self.salary < Decimal::new(MIN_SALARY_CENTS, SALARY_SCALE) {
            errors.push("salary: Salary must be greater than 0".to_string());
        } else if self.salary > Decimal::new(MAX_SALARY_CENTS, SALARY_SCALE) {
            errors.push(format!(
                "salary: Salary must not exceed {}",
                Decimal::new(MAX_SALARY_CENTS, SALARY_SCALE)
            ));
        }
        if self.salary.normalize().scale() > SALARY_SCALE {
            errors.push(format!(
                "salary: Salary can have at most {} decimal places",
                SALARY_SCALE
            ));
        }
        if self.joining_date > today {
            errors.push("joining_date: Joining date cannot be in the future".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(errors.join("; ")))
        }
    }
}
