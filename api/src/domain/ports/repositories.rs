//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//! Uniqueness of department codes and employee emails is enforced by the
//! implementation and reported as `DomainError::AlreadyExists`.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::entities::{
    Department, DepartmentId, Employee, EmployeeId, NewDepartment, NewEmployee,
};
use crate::error::DomainError;

/// Repository for Department entities
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Find a department by ID
    async fn find_by_id(&self, id: &DepartmentId) -> Result<Option<Department>, DomainError>;

    /// Check whether a department exists
    async fn exists(&self, id: &DepartmentId) -> Result<bool, DomainError>;

    /// List every department
    async fn find_all(&self) -> Result<Vec<Department>, DomainError>;

    /// Create a new department
    async fn create(&self, department: &NewDepartment) -> Result<Department, DomainError>;

    /// Replace a department's name and code
    async fn update(
        &self,
        id: &DepartmentId,
        department: &NewDepartment,
    ) -> Result<Department, DomainError>;

    /// Delete a department
    async fn delete(&self, id: &DepartmentId) -> Result<(), DomainError>;
}

/// Repository for Employee entities
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find an employee by ID
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, DomainError>;

    /// Check whether an employee exists
    async fn exists(&self, id: &EmployeeId) -> Result<bool, DomainError>;

    /// List every employee
    async fn find_all(&self) -> Result<Vec<Employee>, DomainError>;

    /// Find all employees that belong to a department
    async fn find_by_department(
        &self,
        department_id: &DepartmentId,
    ) -> Result<Vec<Employee>, DomainError>;

    /// Create a new employee
    async fn create(&self, employee: &NewEmployee) -> Result<Employee, DomainError>;

    /// Replace every mutable field of an employee
    async fn update(&self, id: &EmployeeId, employee: &NewEmployee)
        -> Result<Employee, DomainError>;

    /// Set an employee's salary
    async fn update_salary(&self, id: &EmployeeId, salary: Decimal) -> Result<(), DomainError>;

    /// Delete an employee
    async fn delete(&self, id: &EmployeeId) -> Result<(), DomainError>;

    /// Delete a batch of employees
    async fn delete_many(&self, ids: &[EmployeeId]) -> Result<(), DomainError>;
}
