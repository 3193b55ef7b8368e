//! Employee handlers
//!
//! Endpoints for employee management and department-wide salary adjustment.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::{AdjustmentOutcome, EmployeeAdjustment};
use crate::domain::entities::{DepartmentId, EmployeeDetails, EmployeeId, NewEmployee};
use crate::error::AppError;
use crate::AppState;

/// Request body for creating or updating an employee
#[derive(Debug, Deserialize)]
pub struct EmployeeRequest {
    pub name: String,
    pub email: String,
    pub salary: Decimal,
    pub joining_date: NaiveDate,
    pub department_id: Uuid,
}

impl From<EmployeeRequest> for NewEmployee {
    fn from(request: EmployeeRequest) -> Self {
        NewEmployee {
            name: request.name,
            email: request.email,
            salary: request.salary,
            joining_date: request.joining_date,
            department_id: DepartmentId(request.department_id),
        }
    }
}

/// Request body for a department-wide salary adjustment
#[derive(Debug, Deserialize)]
pub struct SalaryAdjustmentRequest {
    pub department_id: Uuid,
    /// Score in 0..=100
    pub performance_score: i32,
}

#[derive(Debug, Serialize)]
pub struct EmployeeResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub salary: Decimal,
    pub joining_date: NaiveDate,
    pub department_id: String,
    pub department_name: String,
}

impl From<EmployeeDetails> for EmployeeResponse {
    fn from(details: EmployeeDetails) -> Self {
        let employee = details.employee;
        EmployeeResponse {
            id: employee.id.to_string(),
            name: employee.name,
            email: employee.email,
            salary: employee.salary,
            joining_date: employee.joining_date,
            department_id: employee.department_id.to_string(),
            department_name: details.department_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SalaryAdjustmentResponse {
    pub message: String,
    pub department_id: String,
    pub adjusted: usize,
    pub skipped: usize,
    pub failed: usize,
    pub results: Vec<EmployeeAdjustment>,
}

impl From<AdjustmentOutcome> for SalaryAdjustmentResponse {
    fn from(outcome: AdjustmentOutcome) -> Self {
        let message = if outcome.failed_count() == 0 {
            "Salary adjustment completed successfully".to_string()
        } else {
            format!(
                "Salary adjustment completed with {} failed update(s)",
                outcome.failed_count()
            )
        };

        SalaryAdjustmentResponse {
            message,
            department_id: outcome.department_id.to_string(),
            adjusted: outcome.adjusted_count(),
            skipped: outcome.skipped_count(),
            failed: outcome.failed_count(),
            results: outcome.results,
        }
    }
}

/// POST /employees
pub async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<EmployeeRequest>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let details = state
        .employee_service
        .create_employee(&request.into())
        .await?;

    Ok(Json(details.into()))
}

/// GET /employees/:id
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let details = state.employee_service.get_employee(&EmployeeId(id)).await?;

    Ok(Json(details.into()))
}

/// PUT /employees/:id
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<EmployeeRequest>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let details = state
        .employee_service
        .update_employee(&EmployeeId(id), &request.into())
        .await?;

    Ok(Json(details.into()))
}

/// DELETE /employees/:id
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .employee_service
        .delete_employee(&EmployeeId(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /employees
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeResponse>>, AppError> {
    let employees = state.employee_service.get_all_employees().await?;

    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

/// POST /employees/adjust-salary
///
/// Raise salaries across a department. Rejected with 409 if the department
/// was already adjusted within the cooldown window.
pub async fn adjust_salaries(
    State(state): State<AppState>,
    Json(request): Json<SalaryAdjustmentRequest>,
) -> Result<Json<SalaryAdjustmentResponse>, AppError> {
    let outcome = state
        .employee_service
        .adjust_salaries(
            &DepartmentId(request.department_id),
            request.performance_score,
        )
        .await?;

    Ok(Json(outcome.into()))
}
