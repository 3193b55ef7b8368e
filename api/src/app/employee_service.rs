//! Employee service
//!
//! Employee CRUD and the department-wide salary adjustment.

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::app::idempotency::IdempotencyGuard;
use crate::app::salary_rules::{
    compute_new_salary, tenure_years, MAX_PERFORMANCE_SCORE, MIN_PERFORMANCE_SCORE,
};
use crate::domain::entities::{
    Department, DepartmentId, Employee, EmployeeDetails, EmployeeId, NewEmployee,
};
use crate::domain::ports::{Clock, DepartmentRepository, EmployeeRepository};
use crate::error::{AppError, DomainError};

/// What happened to one employee during a salary adjustment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AdjustmentStatus {
    /// Salary strictly increased and was saved
    Adjusted {
        previous_salary: Decimal,
        new_salary: Decimal,
    },
    /// Computed salary was not higher; nothing was written
    Skipped { salary: Decimal },
    /// Computed salary was higher but saving it failed
    Failed { reason: String },
}

/// Per-employee entry of an adjustment outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeAdjustment {
    pub employee_id: EmployeeId,
    #[serde(flatten)]
    pub status: AdjustmentStatus,
}

/// Result of a department-wide salary adjustment
#[derive(Debug, Clone, Serialize)]
pub struct AdjustmentOutcome {
    pub department_id: DepartmentId,
    pub performance_score: i32,
    pub results: Vec<EmployeeAdjustment>,
}

impl AdjustmentOutcome {
    pub fn adjusted_count(&self) -> usize {
        self.count(|s| matches!(s, AdjustmentStatus::Adjusted { .. }))
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|s| matches!(s, AdjustmentStatus::Skipped { .. }))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|s| matches!(s, AdjustmentStatus::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&AdjustmentStatus) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.status)).count()
    }
}

/// Service for managing employees
pub struct EmployeeService<ER, DR, C>
where
    ER: EmployeeRepository,
    DR: DepartmentRepository,
    C: Clock,
{
    employees: Arc<ER>,
    departments: Arc<DR>,
    clock: Arc<C>,
    guard: Arc<IdempotencyGuard<C>>,
}

impl<ER, DR, C> EmployeeService<ER, DR, C>
where
    ER: EmployeeRepository,
    DR: DepartmentRepository,
    C: Clock,
{
    pub fn new(
        employees: Arc<ER>,
        departments: Arc<DR>,
        clock: Arc<C>,
        guard: Arc<IdempotencyGuard<C>>,
    ) -> Self {
        Self {
            employees,
            departments,
            clock,
            guard,
        }
    }

    /// Create a new employee in an existing department
    pub async fn create_employee(&self, request: &NewEmployee) -> Result<EmployeeDetails, AppError> {
        request.validate(self.clock.today())?;
        let department = self.require_department(&request.department_id).await?;

        let employee = self.employees.create(request).await?;
        tracing::info!(employee_id = %employee.id, department_id = %department.id, "Employee created");

        Ok(EmployeeDetails {
            employee,
            department_name: department.name,
        })
    }

    /// Get an employee by ID
    pub async fn get_employee(&self, id: &EmployeeId) -> Result<EmployeeDetails, AppError> {
        let employee = self
            .employees
            .find_by_id(id)
            .await?
            .ok_or_else(|| employee_not_found(id))?;
        let department = self.require_department(&employee.department_id).await?;

        Ok(EmployeeDetails {
            employee,
            department_name: department.name,
        })
    }

    /// Replace an employee's details, possibly moving them to another department
    pub async fn update_employee(
        &self,
        id: &EmployeeId,
        request: &NewEmployee,
    ) -> Result<EmployeeDetails, AppError> {
        request.validate(self.clock.today())?;
        if !self.employees.exists(id).await? {
            return Err(employee_not_found(id));
        }
        let department = self.require_department(&request.department_id).await?;

        let employee = self.employees.update(id, request).await?;

        Ok(EmployeeDetails {
            employee,
            department_name: department.name,
        })
    }

    /// Delete an employee
    pub async fn delete_employee(&self, id: &EmployeeId) -> Result<(), AppError> {
        if !self.employees.exists(id).await? {
            return Err(employee_not_found(id));
        }
        self.employees.delete(id).await?;
        tracing::info!(employee_id = %id, "Employee deleted");
        Ok(())
    }

    /// List all employees with their department names
    pub async fn get_all_employees(&self) -> Result<Vec<EmployeeDetails>, AppError> {
        let names: HashMap<DepartmentId, String> = self
            .departments
            .find_all()
            .await?
            .into_iter()
            .map(|d| (d.id, d.name))
            .collect();

        let employees = self.employees.find_all().await?;

        Ok(employees
            .into_iter()
            .map(|employee| EmployeeDetails {
                department_name: names
                    .get(&employee.department_id)
                    .cloned()
                    .unwrap_or_default(),
                employee,
            })
            .collect())
    }

    /// Apply the salary rules to every employee of a department
    ///
    /// At most one adjustment per department is accepted within the cooldown
    /// window; a rejected call reads and writes no employee. Once accepted,
    /// each employee is processed independently: only strict increases are
    /// saved, and a failed save is reported without stopping the sweep.
    pub async fn adjust_salaries(
        &self,
        department_id: &DepartmentId,
        performance_score: i32,
    ) -> Result<AdjustmentOutcome, AppError> {
        if !(MIN_PERFORMANCE_SCORE..=MAX_PERFORMANCE_SCORE).contains(&performance_score) {
            return Err(DomainError::Validation(format!(
                "performance_score: Performance score must be between {} and {}",
                MIN_PERFORMANCE_SCORE, MAX_PERFORMANCE_SCORE
            ))
            .into());
        }

        let department = self.require_department(department_id).await?;

        if !self.guard.try_acquire(&department.id) {
            tracing::warn!(department_id = %department.id, "Salary adjustment rejected: cooldown active");
            return Err(DomainError::Conflict(
                "Salary adjustment already performed within the cooldown window".to_string(),
            )
            .into());
        }

        let employees = self.employees.find_by_department(&department.id).await?;
        let today = self.clock.today();

        let mut results = Vec::with_capacity(employees.len());
        for employee in employees {
            let status = self
                .adjust_one(&employee, performance_score, tenure_years(employee.joining_date, today))
                .await;
            results.push(EmployeeAdjustment {
                employee_id: employee.id,
                status,
            });
        }

        let outcome = AdjustmentOutcome {
            department_id: department.id,
            performance_score,
            results,
        };

        tracing::info!(
            department_id = %department.id,
            performance_score,
            adjusted = outcome.adjusted_count(),
            skipped = outcome.skipped_count(),
            failed = outcome.failed_count(),
            "Salary adjustment completed"
        );

        Ok(outcome)
    }

    async fn adjust_one(
        &self,
        employee: &Employee,
        performance_score: i32,
        tenure_years: u32,
    ) -> AdjustmentStatus {
        let new_salary = compute_new_salary(employee.salary, performance_score, tenure_years);

        if new_salary <= employee.salary {
            tracing::warn!(
                employee_id = %employee.id,
                performance_score,
                tenure_years,
                "No salary increase for employee"
            );
            return AdjustmentStatus::Skipped {
                salary: employee.salary,
            };
        }

        match self.employees.update_salary(&employee.id, new_salary).await {
            Ok(()) => {
                tracing::info!(
                    employee_id = %employee.id,
                    previous_salary = %employee.salary,
                    new_salary = %new_salary,
                    "Salary updated"
                );
                AdjustmentStatus::Adjusted {
                    previous_salary: employee.salary,
                    new_salary,
                }
            }
            Err(e) => {
                tracing::warn!(employee_id = %employee.id, error = %e, "Salary update failed");
                AdjustmentStatus::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn require_department(&self, id: &DepartmentId) -> Result<Department, AppError> {
        self.departments.find_by_id(id).await?.ok_or_else(|| {
            AppError::Domain(DomainError::NotFound(format!("Department {} not found", id)))
        })
    }
}

fn employee_not_found(id: &EmployeeId) -> AppError {
    AppError::Domain(DomainError::NotFound(format!("Employee {} not found", id)))
}
