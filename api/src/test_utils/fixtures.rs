//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::{DateTime, Months, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::domain::entities::{Department, DepartmentId, Employee, EmployeeId};

/// Fixed instant used as "now" by time-sensitive tests
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
}

/// Same calendar day `years` years before `date`
pub fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(12 * years)).unwrap()
}

/// Create a test department with default values
pub fn test_department() -> Department {
    Department {
        id: DepartmentId::new(),
        name: "Engineering".to_string(),
        code: "ENG".to_string(),
    }
}

/// Create a test department with a specific code
pub fn test_department_with_code(code: &str) -> Department {
    Department {
        id: DepartmentId::new(),
        name: format!("{} Department", code),
        code: code.to_string(),
    }
}

/// Create a test employee in a department
///
/// The email is derived from `name`, so distinct names give distinct emails.
pub fn test_employee(department_id: DepartmentId, name: &str) -> Employee {
    test_employee_with(
        department_id,
        name,
        Decimal::new(75_000_00, 2),
        years_before(fixed_now().date_naive(), 3),
    )
}

/// Create a test employee with a specific salary and joining date
pub fn test_employee_with(
    department_id: DepartmentId,
    name: &str,
    salary: Decimal,
    joining_date: NaiveDate,
) -> Employee {
    Employee {
        id: EmployeeId::new(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        salary,
        joining_date,
        department_id,
    }
}
