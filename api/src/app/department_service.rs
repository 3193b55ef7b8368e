//! Department service
//!
//! Department CRUD plus guarded deletion. A department that still owns
//! employees is only removed when the caller forces it, in which case its
//! employees are removed first.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::{Department, DepartmentId, EmployeeId, NewDepartment};
use crate::domain::ports::{DepartmentRepository, EmployeeRepository};
use crate::error::{AppError, DomainError};

/// Employee removed as part of a forced department deletion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovedEmployee {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
}

/// Result of a department deletion
#[derive(Debug, Clone, Serialize)]
pub struct DeletionOutcome {
    pub department_id: DepartmentId,
    /// Employees removed before the department (empty unless forced)
    pub removed_employees: Vec<RemovedEmployee>,
}

/// Service for managing departments
pub struct DepartmentService<DR, ER>
where
    DR: DepartmentRepository,
    ER: EmployeeRepository,
{
    departments: Arc<DR>,
    employees: Arc<ER>,
}

impl<DR, ER> DepartmentService<DR, ER>
where
    DR: DepartmentRepository,
    ER: EmployeeRepository,
{
    pub fn new(departments: Arc<DR>, employees: Arc<ER>) -> Self {
        Self {
            departments,
            employees,
        }
    }

    /// Create a new department
    pub async fn create_department(&self, request: &NewDepartment) -> Result<Department, AppError> {
        request.validate()?;
        let department = self.departments.create(request).await?;
        tracing::info!(department_id = %department.id, code = %department.code, "Department created");
        Ok(department)
    }

    /// Get a department by ID
    pub async fn get_department(&self, id: &DepartmentId) -> Result<Department, AppError> {
        self.departments
            .find_by_id(id)
            .await?
            .ok_or_else(|| department_not_found(id))
    }

    /// Rename a department or change its code
    pub async fn update_department(
        &self,
        id: &DepartmentId,
        request: &NewDepartment,
    ) -> Result<Department, AppError> {
        request.validate()?;
        if !self.departments.exists(id).await? {
            return Err(department_not_found(id));
        }
        Ok(self.departments.update(id, request).await?)
    }

    /// List all departments
    pub async fn get_all_departments(&self) -> Result<Vec<Department>, AppError> {
        Ok(self.departments.find_all().await?)
    }

    /// Delete a department
    ///
    /// Fails with `Conflict` when employees still reference the department and
    /// `force` is false; nothing is modified in that case. With `force`, every
    /// employee is removed before the department. If removing the department
    /// fails afterwards, retrying the call succeeds since no employees remain.
    pub async fn delete_department(
        &self,
        id: &DepartmentId,
        force: bool,
    ) -> Result<DeletionOutcome, AppError> {
        if !self.departments.exists(id).await? {
            return Err(department_not_found(id));
        }

        let employees = self.employees.find_by_department(id).await?;

        let mut removed_employees = Vec::with_capacity(employees.len());
        if !employees.is_empty() {
            if !force {
                return Err(DomainError::Conflict(
                    "Cannot delete department with existing employees. Use ?force=true to delete anyway."
                        .to_string(),
                )
                .into());
            }

            for employee in &employees {
                tracing::info!(
                    department_id = %id,
                    employee_id = %employee.id,
                    name = %employee.name,
                    email = %employee.email,
                    "Force delete: removing employee"
                );
            }

            let ids: Vec<EmployeeId> = employees.iter().map(|e| e.id).collect();
            self.employees.delete_many(&ids).await?;

            removed_employees.extend(employees.into_iter().map(|e| RemovedEmployee {
                id: e.id,
                name: e.name,
                email: e.email,
            }));
        }

        tracing::info!(department_id = %id, "Deleting department");
        self.departments.delete(id).await?;

        Ok(DeletionOutcome {
            department_id: *id,
            removed_employees,
        })
    }
}

fn department_not_found(id: &DepartmentId) -> AppError {
    AppError::Domain(DomainError::NotFound(format!("Department {} not found", id)))
}
