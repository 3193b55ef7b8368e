//! Department handlers
//!
//! Endpoints for department management.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Department, DepartmentId, NewDepartment};
use crate::error::AppError;
use crate::AppState;

/// Request body for creating or updating a department
#[derive(Debug, Deserialize)]
pub struct DepartmentRequest {
    pub name: String,
    pub code: String,
}

impl From<DepartmentRequest> for NewDepartment {
    fn from(request: DepartmentRequest) -> Self {
        NewDepartment {
            name: request.name,
            code: request.code,
        }
    }
}

/// Query parameters for deleting a department
#[derive(Debug, Deserialize)]
pub struct DeleteDepartmentQuery {
    /// Also delete the department's employees
    #[serde(default)]
    pub force: bool,
}

#[derive(Debug, Serialize)]
pub struct DepartmentResponse {
    pub id: String,
    pub name: String,
    pub code: String,
}

impl From<Department> for DepartmentResponse {
    fn from(department: Department) -> Self {
        DepartmentResponse {
            id: department.id.to_string(),
            name: department.name,
            code: department.code,
        }
    }
}

/// POST /departments
pub async fn create_department(
    State(state): State<AppState>,
    Json(request): Json<DepartmentRequest>,
) -> Result<Json<DepartmentResponse>, AppError> {
    let department = state
        .department_service
        .create_department(&request.into())
        .await?;

    Ok(Json(department.into()))
}

/// GET /departments/:id
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DepartmentResponse>, AppError> {
    let department = state
        .department_service
        .get_department(&DepartmentId(id))
        .await?;

    Ok(Json(department.into()))
}

/// PUT /departments/:id
pub async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<DepartmentRequest>,
) -> Result<Json<DepartmentResponse>, AppError> {
    let department = state
        .department_service
        .update_department(&DepartmentId(id), &request.into())
        .await?;

    Ok(Json(department.into()))
}

/// DELETE /departments/:id?force=true
///
/// Without `force`, a department that still has employees is not deleted.
pub async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DeleteDepartmentQuery>,
) -> Result<StatusCode, AppError> {
    state
        .department_service
        .delete_department(&DepartmentId(id), query.force)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /departments
pub async fn list_departments(
    State(state): State<AppState>,
) -> Result<Json<Vec<DepartmentResponse>>, AppError> {
    let departments = state.department_service.get_all_departments().await?;

    Ok(Json(departments.into_iter().map(Into::into).collect()))
}
